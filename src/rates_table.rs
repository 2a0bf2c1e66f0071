use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
pub struct DailyRate {
    #[serde(rename = "effectiveDate")]
    pub effective_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub mid: Decimal,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct RatesTable {
    pub rates: Vec<DailyRate>,
}
