use crate::error::StrategyError;
use crate::model::signal::Signal;
use crate::model::tick::MarketDataPoint;

pub mod naive_ma;
pub mod windowed_ma;

/// The common interface for a tick-driven signal strategy.
///
/// A strategy owns private mutable state scoped to a single symbol's tick
/// stream. It performs no I/O and touches no shared state, so independent
/// instances can run on parallel threads (hence the `Send` bound).
///
/// Callers must feed ticks in non-decreasing timestamp order; the strategy
/// does not enforce or re-sort ordering.
pub trait Strategy: Send {
    /// Human-readable identifier, used only for reporting.
    fn name(&self) -> &'static str;

    /// Consume one tick, update internal state, and emit a signal.
    ///
    /// Returns `Ok(None)` while the window is still warming up (fewer than
    /// `window_size` prices seen) and `Ok(Some(_))` from then on. A tick
    /// with a non-finite price is rejected with
    /// [`StrategyError::MalformedTick`] and leaves the state untouched.
    fn on_tick(&mut self, tick: &MarketDataPoint) -> Result<Option<Signal>, StrategyError>;

    /// Current state footprint in bytes (struct plus owned heap buffers),
    /// sampled by the benchmark harness to track peak memory.
    fn memory_bytes(&self) -> usize;
}
