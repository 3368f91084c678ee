use serde::{Deserialize, Serialize};

/// Categorical trading signal emitted once per tick after warm-up.
///
/// There is no warm-up variant: a strategy that has not yet seen a full
/// window returns `None` instead of a `Signal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}
