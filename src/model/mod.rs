pub mod signal;
pub mod tick;
