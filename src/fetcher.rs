use chrono::NaiveDate;
use log::debug;

use crate::date_ranges::get_date_ranges;
use crate::error::RatesError;
use crate::exchange_rate::{Currency, DateRange, RatePoint};
use crate::http::{HttpClient, HttpResponse};
use crate::rates_table::RatesTable;

pub const DEFAULT_API_URL: &str = "http://api.nbp.pl/api";
pub const AVG_TABLE_TYPE: &str = "A";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedChunk {
    pub range: DateRange,
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct FetchOutcome {
    pub points: Vec<RatePoint>,
    pub skipped: Vec<SkippedChunk>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

pub struct RateFetcher<C> {
    client: C,
    api_url: String,
}

impl<C: HttpClient> RateFetcher<C> {
    pub fn new(client: C, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn daily_rates(
        &self,
        currency: Currency,
        days_num: i64,
    ) -> Result<FetchOutcome, RatesError> {
        let ranges = get_date_ranges(days_num)?;
        self.fetch_ranges(currency, ranges).await
    }

    // Anything but 200 lands in `skipped`; transport and parse failures abort.
    pub async fn fetch_ranges(
        &self,
        currency: Currency,
        ranges: Vec<DateRange>,
    ) -> Result<FetchOutcome, RatesError> {
        let mut outcome = FetchOutcome::default();

        for range in ranges {
            let url = self.range_url(currency, &range);
            debug!(
                "Requesting {} rates for {} ({} days): {}",
                currency,
                range,
                range.days(),
                url
            );

            let resp = self.client.get(&url).await?;
            if !resp.is_ok() {
                debug!("Chunk {} answered with status {}", range, resp.status);
                outcome.skipped.push(skipped(range, resp));
                continue;
            }

            outcome.points.extend(parse_rates(&resp.body)?);
        }

        Ok(outcome)
    }

    fn range_url(&self, currency: Currency, range: &DateRange) -> String {
        format!(
            "{}/exchangerates/rates/{}/{}/{}/{}",
            self.api_url,
            AVG_TABLE_TYPE,
            currency.code(),
            range.start.format(DATE_FORMAT),
            range.end.format(DATE_FORMAT)
        )
    }
}

fn skipped(range: DateRange, resp: HttpResponse) -> SkippedChunk {
    SkippedChunk {
        range,
        status: resp.status,
        body: resp.body,
    }
}

fn parse_rates(body: &str) -> Result<Vec<RatePoint>, RatesError> {
    let table: RatesTable = serde_json::from_str(body)?;

    table
        .rates
        .into_iter()
        .map(|day| {
            let date = NaiveDate::parse_from_str(&day.effective_date, DATE_FORMAT).map_err(
                |source| RatesError::InvalidDate {
                    value: day.effective_date.clone(),
                    source,
                },
            )?;
            Ok(RatePoint {
                date,
                rate: day.mid,
            })
        })
        .collect()
}
