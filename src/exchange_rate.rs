use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Euro,
}

impl Currency {
    /// Code used both as the API path segment and as the chart label.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Euro => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatePoint {
    pub date: NaiveDate,
    pub rate: Decimal,
}

impl RatePoint {
    pub fn rate_f64(&self) -> f64 {
        self.rate.to_f64().unwrap_or_default()
    }
}

/// Inclusive span of days, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn currency_codes() {
        assert_eq!(Currency::Usd.code(), "USD");
        assert_eq!(Currency::Euro.to_string(), "EUR");
    }

    #[test]
    fn range_days_are_inclusive() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(DateRange { start: day, end: day }.days(), 1);

        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let range = DateRange { start, end };
        assert_eq!(range.days(), 3);
        assert_eq!(range.to_string(), "2024-02-28..=2024-03-01");
    }

    #[test]
    fn rate_converts_for_plotting() {
        let point = RatePoint {
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            rate: Decimal::from_str("3.9512").unwrap(),
        };
        assert!((point.rate_f64() - 3.9512).abs() < 1e-9);
    }
}
