use std::time::Instant;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::StrategyError;
use crate::model::signal::Signal;
use crate::model::tick::MarketDataPoint;
use crate::strategy::naive_ma::NaiveMaStrategy;
use crate::strategy::windowed_ma::WindowedMaStrategy;
use crate::strategy::Strategy;

/// Per-signal tallies for one measured run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SignalCounts {
    pub buy: usize,
    pub sell: usize,
    pub hold: usize,
    pub none: usize,
}

impl SignalCounts {
    pub fn record(&mut self, signal: Option<Signal>) {
        match signal {
            Some(Signal::Buy) => self.buy += 1,
            Some(Signal::Sell) => self.sell += 1,
            Some(Signal::Hold) => self.hold += 1,
            None => self.none += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.buy + self.sell + self.hold + self.none
    }
}

/// Wall-clock time for one full feed plus what the strategy emitted.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeStats {
    pub elapsed_secs: f64,
    pub counts: SignalCounts,
}

/// Feed every tick once and measure wall-clock time.
///
/// Signals are tallied inside the timed loop so the emitted values stay
/// observable to the optimizer; both strategies pay the identical cost.
pub fn measure_runtime(
    strategy: &mut dyn Strategy,
    ticks: &[MarketDataPoint],
) -> Result<RuntimeStats, StrategyError> {
    let mut counts = SignalCounts::default();
    let start = Instant::now();
    for tick in ticks {
        counts.record(strategy.on_tick(tick)?);
    }
    Ok(RuntimeStats {
        elapsed_secs: start.elapsed().as_secs_f64(),
        counts,
    })
}

/// Feed every tick once, sampling the strategy's self-reported state
/// footprint after each, and return the peak in bytes.
pub fn measure_peak_memory(
    strategy: &mut dyn Strategy,
    ticks: &[MarketDataPoint],
) -> Result<usize, StrategyError> {
    let mut peak = strategy.memory_bytes();
    for tick in ticks {
        strategy.on_tick(tick)?;
        peak = peak.max(strategy.memory_bytes());
    }
    Ok(peak)
}

/// Drive two strategies in lock-step over the same ticks and report
/// whether they emitted identical signals at every position.
pub fn signals_match(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    ticks: &[MarketDataPoint],
) -> Result<bool, StrategyError> {
    for tick in ticks {
        if a.on_tick(tick)? != b.on_tick(tick)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Metrics for one strategy at one input size.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyMetrics {
    pub strategy: String,
    pub elapsed_secs: f64,
    pub peak_memory_bytes: usize,
    pub counts: SignalCounts,
}

/// Naive-vs-windowed comparison at one input size.
#[derive(Debug, Clone, Serialize)]
pub struct SizeComparison {
    pub input_size: usize,
    pub naive: StrategyMetrics,
    pub windowed: StrategyMetrics,
    pub signals_agree: bool,
}

/// Results of a full scaling run across input sizes.
#[derive(Debug, Clone, Serialize)]
pub struct ScalingReport {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub window_size: usize,
    pub total_ticks: usize,
    pub comparisons: Vec<SizeComparison>,
}

/// Run both strategies over growing prefixes of `ticks` and collect
/// runtime, peak memory, and signal agreement per size.
///
/// Each measurement pass gets a fresh strategy instance so timing, memory,
/// and equivalence runs cannot disturb one another. Requested sizes larger
/// than the loaded data are clamped with a warning; duplicates (after
/// clamping) run once.
pub fn run_scaling(
    ticks: &[MarketDataPoint],
    window_size: usize,
    input_sizes: &[usize],
    source: impl Into<String>,
) -> Result<ScalingReport> {
    if ticks.is_empty() {
        bail!("no ticks to benchmark");
    }
    let sizes = clamped_sizes(input_sizes, ticks.len());
    if sizes.is_empty() {
        bail!("no usable input sizes (requested: {:?})", input_sizes);
    }

    let mut comparisons = Vec::with_capacity(sizes.len());
    for size in sizes {
        let subset = &ticks[..size];
        tracing::info!(size, window_size, "benchmarking input size");

        let naive = profile(|| NaiveMaStrategy::new(window_size), subset)?;
        let windowed = profile(|| WindowedMaStrategy::new(window_size), subset)?;

        let mut fresh_naive = NaiveMaStrategy::new(window_size)?;
        let mut fresh_windowed = WindowedMaStrategy::new(window_size)?;
        let signals_agree = signals_match(&mut fresh_naive, &mut fresh_windowed, subset)?;
        if !signals_agree {
            tracing::warn!(size, "strategies disagreed on at least one signal");
        }

        comparisons.push(SizeComparison {
            input_size: size,
            naive,
            windowed,
            signals_agree,
        });
    }

    Ok(ScalingReport {
        generated_at: Utc::now(),
        source: source.into(),
        window_size,
        total_ticks: ticks.len(),
        comparisons,
    })
}

fn profile<S, F>(make: F, ticks: &[MarketDataPoint]) -> Result<StrategyMetrics, StrategyError>
where
    S: Strategy,
    F: Fn() -> Result<S, StrategyError>,
{
    let mut for_runtime = make()?;
    let runtime = measure_runtime(&mut for_runtime, ticks)?;

    let mut for_memory = make()?;
    let peak_memory_bytes = measure_peak_memory(&mut for_memory, ticks)?;

    Ok(StrategyMetrics {
        strategy: for_runtime.name().to_string(),
        elapsed_secs: runtime.elapsed_secs,
        peak_memory_bytes,
        counts: runtime.counts,
    })
}

fn clamped_sizes(requested: &[usize], available: usize) -> Vec<usize> {
    let mut sizes = Vec::new();
    for &req in requested {
        if req == 0 {
            tracing::warn!("skipping zero input size");
            continue;
        }
        let size = req.min(available);
        if size < req {
            tracing::warn!(
                requested = req,
                clamped = size,
                "input size exceeds loaded tick count; clamping"
            );
        }
        if !sizes.contains(&size) {
            sizes.push(size);
        }
    }
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_counts_tally_all_outcomes() {
        let mut counts = SignalCounts::default();
        counts.record(None);
        counts.record(Some(Signal::Buy));
        counts.record(Some(Signal::Buy));
        counts.record(Some(Signal::Sell));
        counts.record(Some(Signal::Hold));
        assert_eq!(counts.buy, 2);
        assert_eq!(counts.sell, 1);
        assert_eq!(counts.hold, 1);
        assert_eq!(counts.none, 1);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn sizes_are_clamped_and_deduplicated() {
        assert_eq!(clamped_sizes(&[1000, 10_000, 100_000], 5000), vec![1000, 5000]);
        assert_eq!(clamped_sizes(&[10, 10, 20], 100), vec![10, 20]);
        assert_eq!(clamped_sizes(&[0], 100), Vec::<usize>::new());
    }

    #[test]
    fn runtime_pass_feeds_every_tick() {
        let ticks: Vec<MarketDataPoint> =
            (0..50).map(|i| MarketDataPoint::from_price(100.0 + i as f64)).collect();
        let mut strat = WindowedMaStrategy::new(5).unwrap();
        let stats = measure_runtime(&mut strat, &ticks).unwrap();
        assert_eq!(stats.counts.total(), 50);
        assert_eq!(stats.counts.none, 4);
        assert!(stats.elapsed_secs >= 0.0);
    }
}
