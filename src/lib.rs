pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
#[cfg(feature = "plot")]
pub mod plot;
pub mod profiler;
pub mod report;
pub mod strategy;
