//! Error types for the signal engine.
//!
//! None of these are fatal to the poll loop: fetch errors skip a cycle,
//! notify errors are logged. Only `ConfigError` can stop the process, and
//! only before the loop starts.

use thiserror::Error;

/// Failure to obtain a usable candle series from the data source.
#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Exchange API error: {0}")]
    Api(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Unsupported timeframe: {0}")]
    UnsupportedTimeframe(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Failure to deliver a notification.
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Message rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Startup configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
