use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RatesError {
    #[error("Number of days cannot be <= 0, got {0}")]
    InvalidDayCount(i64),

    #[error("Can't step {days} days back from {from}")]
    DateOutOfRange { from: NaiveDate, days: u64 },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed rates response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Can't parse effective date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Some of the currency data lists are empty")]
    EmptySeries,

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid value '{value}' for {key}")]
    InvalidConfig { key: &'static str, value: String },
}
