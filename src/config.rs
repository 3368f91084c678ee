use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub benchmark: BenchmarkConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub csv_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: "data/market_data.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    pub window_size: usize,
    pub input_sizes: Vec<usize>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            window_size: 50,
            input_sizes: vec![1_000, 10_000, 100_000],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub output_dir: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: "reports".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Parse a comma-separated list of input sizes (e.g. "1000,10000,100000").
pub fn parse_input_sizes(s: &str) -> Result<Vec<usize>> {
    let mut sizes = Vec::new();
    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let n: usize = part.parse().with_context(|| {
            format!("invalid input size '{}': expected a positive integer", part)
        })?;
        if n == 0 {
            bail!("invalid input size '{}': must be > 0", part);
        }
        sizes.push(n);
    }
    if sizes.is_empty() {
        bail!("no input sizes found in '{}'", s);
    }
    Ok(sizes)
}

impl Config {
    /// Load from `path`, or fall back to defaults when the file is absent.
    /// A file that exists but does not parse is an error, not a fallback.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.benchmark.window_size == 0 {
            bail!("benchmark.window_size must be at least 1");
        }
        if self.benchmark.input_sizes.is_empty() {
            bail!("benchmark.input_sizes must not be empty");
        }
        if self.benchmark.input_sizes.iter().any(|&n| n == 0) {
            bail!("benchmark.input_sizes entries must be > 0");
        }
        Ok(())
    }
}
