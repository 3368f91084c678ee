use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use clap::Parser;

use tickbench::ingest;
use tickbench::model::tick::MarketDataPoint;

#[derive(Debug, Parser)]
#[command(
    name = "gen_ticks",
    about = "Generate a deterministic tick CSV for benchmarking"
)]
struct Cli {
    /// Output CSV path.
    #[arg(long, default_value = "data/market_data.csv")]
    out: PathBuf,

    /// Number of ticks to generate.
    #[arg(long, default_value_t = 100_000)]
    count: usize,

    /// Symbol stamped on every row.
    #[arg(long, default_value = "SYNTH")]
    symbol: String,

    /// Price the series oscillates around.
    #[arg(long, default_value_t = 100.0)]
    base_price: f64,

    /// RFC3339 timestamp of the first tick.
    #[arg(long, default_value = "2025-01-01T00:00:00Z")]
    start: String,

    /// Seconds between consecutive ticks.
    #[arg(long, default_value_t = 1)]
    interval_secs: i64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.count == 0 {
        bail!("--count must be at least 1");
    }
    let start: DateTime<Utc> = cli
        .start
        .parse()
        .with_context(|| format!("invalid --start '{}'", cli.start))?;

    let ticks = generate(
        &cli.symbol,
        cli.base_price,
        start,
        cli.interval_secs,
        cli.count,
    );
    ingest::write_market_data(&cli.out, &ticks)?;
    tracing::info!(count = ticks.len(), path = %cli.out.display(), "wrote synthetic ticks");
    Ok(())
}

/// Trending price with a sinusoidal swing, identical on every run.
fn generate(
    symbol: &str,
    base_price: f64,
    start: DateTime<Utc>,
    interval_secs: i64,
    count: usize,
) -> Vec<MarketDataPoint> {
    (0..count)
        .map(|i| {
            let trend = i as f64 * 0.001;
            let swing = (i as f64 * 0.1).sin() * 0.5;
            let timestamp = start + Duration::seconds(i as i64 * interval_secs);
            MarketDataPoint::new(timestamp, symbol, base_price + trend + swing)
        })
        .collect()
}
