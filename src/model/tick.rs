use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One immutable market observation. Constructed by the ingestion layer
/// (or a test helper) and never mutated afterwards, so shared references
/// can cross threads freely.
///
/// `timestamp` is the ordering key: strategies assume ticks arrive in
/// non-decreasing timestamp order and do not re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketDataPoint {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub price: f64,
}

impl MarketDataPoint {
    pub fn new(timestamp: DateTime<Utc>, symbol: impl Into<String>, price: f64) -> Self {
        Self {
            timestamp,
            symbol: symbol.into(),
            price,
        }
    }

    /// Create a synthetic tick carrying only a price (for tests and benches).
    pub fn from_price(price: f64) -> Self {
        Self {
            timestamp: Utc.timestamp_opt(0, 0).single().unwrap_or_default(),
            symbol: "SYNTH".to_string(),
            price,
        }
    }
}
