use anyhow::{Context, Result};
use log::{info, warn};

use chart::draw_chart_for_rates_of;
use config::Config;
use exchange_rate::Currency;
use fetcher::{FetchOutcome, RateFetcher};
use http::{HttpClient, ReqwestClient};

mod chart;
mod config;
mod date_ranges;
mod error;
mod exchange_rate;
mod fetcher;
mod http;
mod rates_table;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()?;
    let fetcher = RateFetcher::new(ReqwestClient::new(), &config.api_url);

    let usd = fetch(&fetcher, Currency::Usd, config.days).await?;
    let euro = fetch(&fetcher, Currency::Euro, config.days).await?;

    draw_chart_for_rates_of(
        &usd.points,
        Currency::Usd.code(),
        &euro.points,
        Currency::Euro.code(),
        &config.output_dir,
    )
    .context("Can't draw the rates chart")?;

    Ok(())
}

async fn fetch<C: HttpClient>(
    fetcher: &RateFetcher<C>,
    currency: Currency,
    days: i64,
) -> Result<FetchOutcome> {
    let outcome = fetcher
        .daily_rates(currency, days)
        .await
        .with_context(|| format!("Can't fetch {} rates for {} days", currency, days))?;

    info!("Fetched {} {} rates", outcome.points.len(), currency);
    for chunk in &outcome.skipped {
        warn!(
            "Skipped {} rates for {}: status code '{}', response text: '{}'",
            currency, chunk.range, chunk.status, chunk.body
        );
    }
    if !outcome.is_complete() {
        warn!(
            "{} {} date range(s) returned no data, the chart will have gaps",
            outcome.skipped.len(),
            currency
        );
    }

    Ok(outcome)
}
