use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::model::tick::MarketDataPoint;

/// Raw CSV row before timestamp parsing: `timestamp,symbol,price`.
#[derive(Debug, Deserialize)]
struct RawRow {
    timestamp: String,
    symbol: String,
    price: f64,
}

/// Parse an ISO-8601 market timestamp.
///
/// Accepts RFC 3339 (`2025-01-01T09:30:00Z`, `2025-01-01T09:30:00+00:00`)
/// and naive `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM:SS` forms with
/// optional fractional seconds; naive timestamps are taken as UTC.
pub fn parse_market_timestamp(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    bail!(
        "unrecognized timestamp '{}': expected ISO-8601 like 2025-01-01T09:30:00Z",
        s
    )
}

/// Load tick data from a CSV file with header `timestamp,symbol,price`.
///
/// Every row must carry a parseable timestamp and a finite price; a bad row
/// aborts the load with its line number. Rows are sorted by timestamp so
/// the strategies' ordering precondition holds even for unsorted files.
pub fn load_market_data(path: &Path) -> Result<Vec<MarketDataPoint>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut reader = csv::Reader::from_reader(file);

    let mut ticks = Vec::new();
    for (idx, row) in reader.deserialize::<RawRow>().enumerate() {
        // Header occupies line 1, so data rows start at line 2.
        let line = idx + 2;
        let row = row.with_context(|| format!("failed to parse CSV row at line {}", line))?;
        let timestamp = parse_market_timestamp(&row.timestamp)
            .with_context(|| format!("bad timestamp at line {}", line))?;
        if !row.price.is_finite() {
            bail!(
                "non-finite price {} for {} at line {}",
                row.price,
                row.symbol,
                line
            );
        }
        ticks.push(MarketDataPoint::new(timestamp, row.symbol, row.price));
    }

    ticks.sort_by_key(|t| t.timestamp);
    tracing::info!(ticks = ticks.len(), path = %path.display(), "loaded market data");
    Ok(ticks)
}

/// Write tick data as CSV, the inverse of [`load_market_data`].
pub fn write_market_data(path: &Path, ticks: &[MarketDataPoint]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for tick in ticks {
        writer.serialize(tick)?;
    }
    writer.flush()?;
    Ok(())
}
