use crate::error::StrategyError;
use crate::model::signal::Signal;
use crate::model::tick::MarketDataPoint;
use crate::strategy::Strategy;

/// Incremental moving-average strategy: a fixed-capacity ring buffer plus a
/// running sum, giving O(1) time per tick and O(window_size) space
/// regardless of stream length.
///
/// Invariant: `running_sum` always equals the sum of the buffered prices,
/// up to floating-point accumulation error.
#[derive(Debug)]
pub struct WindowedMaStrategy {
    window_size: usize,
    buffer: Vec<f64>,
    head: usize,
    count: usize,
    running_sum: f64,
}

impl WindowedMaStrategy {
    pub fn new(window_size: usize) -> Result<Self, StrategyError> {
        if window_size == 0 {
            return Err(StrategyError::InvalidWindowSize(window_size));
        }
        Ok(Self {
            window_size,
            // Allocated once at capacity; never reallocates afterwards.
            buffer: vec![0.0; window_size],
            head: 0,
            count: 0,
            running_sum: 0.0,
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of prices currently buffered (≤ window_size).
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_warmed_up(&self) -> bool {
        self.count == self.window_size
    }

    pub fn running_sum(&self) -> f64 {
        self.running_sum
    }

    /// Mean of the current window. `None` until the window has filled.
    pub fn mean(&self) -> Option<f64> {
        if self.is_warmed_up() {
            Some(self.running_sum / self.window_size as f64)
        } else {
            None
        }
    }

    /// Window contents in arrival order, oldest first.
    pub fn window(&self) -> Vec<f64> {
        if self.count < self.window_size {
            // Not yet wrapped: slots 0..count were filled in order.
            self.buffer[..self.count].to_vec()
        } else {
            let mut out = Vec::with_capacity(self.window_size);
            out.extend_from_slice(&self.buffer[self.head..]);
            out.extend_from_slice(&self.buffer[..self.head]);
            out
        }
    }
}

impl Strategy for WindowedMaStrategy {
    fn name(&self) -> &'static str {
        "WindowedMovingAverage"
    }

    fn on_tick(&mut self, tick: &MarketDataPoint) -> Result<Option<Signal>, StrategyError> {
        if !tick.price.is_finite() {
            return Err(StrategyError::MalformedTick {
                symbol: tick.symbol.clone(),
                timestamp: tick.timestamp,
                price: tick.price,
            });
        }

        // Once full, the slot at `head` holds the oldest price; retire it
        // from the sum before overwriting.
        if self.count == self.window_size {
            self.running_sum -= self.buffer[self.head];
        }
        self.buffer[self.head] = tick.price;
        self.running_sum += tick.price;
        self.head = (self.head + 1) % self.window_size;
        if self.count < self.window_size {
            self.count += 1;
        }

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
        std::mem::size_of::<Self>() + self.buffer.capacity() * std::mem::size_of::<f64>()
    }
}
