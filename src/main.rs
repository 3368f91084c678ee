use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use tickbench::config::{parse_input_sizes, Config};
use tickbench::ingest;
use tickbench::profiler;
use tickbench::report;

#[derive(Debug, Parser)]
#[command(
    name = "tickbench",
    about = "Compare naive and incremental moving-average strategies over tick data"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, default_value = "config/default.toml")]
    config: PathBuf,

    /// CSV file with timestamp,symbol,price rows (overrides config).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Moving-average window size in ticks (overrides config).
    #[arg(long)]
    window: Option<usize>,

    /// Comma-separated input sizes, e.g. "1000,10000,100000" (overrides config).
    #[arg(long)]
    sizes: Option<String>,

    /// Directory for the markdown/JSON reports (overrides config).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load_or_default(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                config
                    .logging
                    .level
                    .parse()
                    .unwrap_or_else(|_| "info".parse().unwrap())
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli
        .data
        .unwrap_or_else(|| PathBuf::from(&config.data.csv_path));
    let window_size = cli.window.unwrap_or(config.benchmark.window_size);
    let input_sizes = match &cli.sizes {
        Some(s) => parse_input_sizes(s).context("invalid --sizes")?,
        None => config.benchmark.input_sizes.clone(),
    };
    let out_dir = cli
        .out
        .unwrap_or_else(|| PathBuf::from(&config.report.output_dir));

    if window_size == 0 {
        bail!("window size must be at least 1");
    }

    tracing::info!(
        data = %data_path.display(),
        window_size,
        sizes = ?input_sizes,
        "starting benchmark"
    );

    let ticks = ingest::load_market_data(&data_path)?;
    let scaling = profiler::run_scaling(
        &ticks,
        window_size,
        &input_sizes,
        data_path.display().to_string(),
    )?;

    report::print_summary(&scaling);
    let (md_path, json_path) = report::write_reports(&scaling, &out_dir)?;
    tracing::info!(
        md = %md_path.display(),
        json = %json_path.display(),
        "wrote reports"
    );

    #[cfg(feature = "plot")]
    tickbench::plot::write_plots(&scaling, &out_dir)?;

    if scaling.comparisons.iter().any(|c| !c.signals_agree) {
        bail!("strategies diverged on at least one input size; see the report");
    }

    Ok(())
}
