use std::env;
use std::path::PathBuf;

use crate::error::RatesError;
use crate::fetcher::DEFAULT_API_URL;

pub const DEFAULT_DAYS: i64 = 366 / 2;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub days: i64,
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, RatesError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, RatesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("NBP_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let days = match lookup("RATES_DAYS") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| RatesError::InvalidConfig {
                    key: "RATES_DAYS",
                    value,
                })?,
            None => DEFAULT_DAYS,
        };

        let output_dir = lookup("CHART_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            api_url,
            days,
            output_dir,
        })
    }
}
