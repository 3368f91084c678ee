use crate::error::StrategyError;
use crate::model::signal::Signal;
use crate::model::tick::MarketDataPoint;
use crate::strategy::Strategy;

/// Baseline moving-average strategy: keeps every price it has ever seen and
/// re-sums the trailing window on each tick. O(window) time per tick,
/// O(n) cumulative space.
///
/// This is the comparison baseline for [`WindowedMaStrategy`]; its cost
/// profile is the point of the benchmark, so it stays unoptimized.
///
/// [`WindowedMaStrategy`]: crate::strategy::windowed_ma::WindowedMaStrategy
#[derive(Debug)]
pub struct NaiveMaStrategy {
    window_size: usize,
    history: Vec<f64>,
}

impl NaiveMaStrategy {
    pub fn new(window_size: usize) -> Result<Self, StrategyError> {
        if window_size == 0 {
            return Err(StrategyError::InvalidWindowSize(window_size));
        }
        Ok(Self {
            window_size,
            history: Vec::new(),
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Total prices retained so far (grows without bound).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Trailing-window mean, recomputed from scratch. `None` until
    /// `window_size` prices have arrived.
    pub fn mean(&self) -> Option<f64> {
        if self.history.len() < self.window_size {
            return None;
        }
        let window = &self.history[self.history.len() - self.window_size..];
        Some(window.iter().sum::<f64>() / self.window_size as f64)
    }
}

impl Strategy for NaiveMaStrategy {
    fn name(&self) -> &'static str {
        "NaiveMovingAverage"
    }

    fn on_tick(&mut self, tick: &MarketDataPoint) -> Result<Option<Signal>, StrategyError> {
        if !tick.price.is_finite() {
            return Err(StrategyError::MalformedTick {
                symbol: tick.symbol.clone(),
                timestamp: tick.timestamp,
                price: tick.price,
            });
        }

        self.history.push(tick.price);
        let Some(mean) = self.mean() else {
            return Ok(None);
        };

        let signal = if tick.price > mean {
            Signal::Buy
        } else if tick.price < mean {
            Signal::Sell
        } else {
            Signal::Hold
        };
        Ok(Some(signal))
    }

    fn memory_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.history.capacity() * std::mem::size_of::<f64>()
    }
}
