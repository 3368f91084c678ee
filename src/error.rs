use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failures the strategy core can produce. Everything else (files, CSV,
/// config parsing) belongs to the collaborators and travels as `anyhow`.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("invalid window size {0}: must be at least 1")]
    InvalidWindowSize(usize),

    #[error("malformed tick for {symbol} at {timestamp}: price {price} is not finite")]
    MalformedTick {
        symbol: String,
        timestamp: DateTime<Utc>,
        price: f64,
    },
}
