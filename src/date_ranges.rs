use chrono::{Days, NaiveDate, Utc};

use crate::error::RatesError;
use crate::exchange_rate::DateRange;

/// Widest span the API accepts in a single request.
pub const MAX_DAYS: u64 = 365;

/// Splits the last `days_num` days (today included) into API-sized chunks, oldest first.
pub fn get_date_ranges(days_num: i64) -> Result<Vec<DateRange>, RatesError> {
    get_date_ranges_from(Utc::now().date_naive(), days_num)
}

pub fn get_date_ranges_from(today: NaiveDate, days_num: i64) -> Result<Vec<DateRange>, RatesError> {
    if days_num <= 0 {
        return Err(RatesError::InvalidDayCount(days_num));
    }

    let mut remaining = days_num as u64;
    let mut ranges = Vec::new();
    let mut end = today;

    loop {
        let chunk = remaining.min(MAX_DAYS);
        let start = step_back(end, chunk - 1)?;
        ranges.push(DateRange { start, end });

        remaining -= chunk;
        if remaining == 0 {
            break;
        }

        end = step_back(start, 1)?;
    }

    ranges.reverse();
    Ok(ranges)
}

fn step_back(from: NaiveDate, days: u64) -> Result<NaiveDate, RatesError> {
    from.checked_sub_days(Days::new(days))
        .ok_or(RatesError::DateOutOfRange { from, days })
}
