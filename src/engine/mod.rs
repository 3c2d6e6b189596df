//! Deterministic estimation over a consumption series.

/// Trailing moving average of the readings.
pub mod moving_average;
pub mod report;
/// PV array sizing and savings projection.
pub mod sizing;
pub mod stats;

// Re-export the main types for convenience
pub use moving_average::moving_average;
pub use report::EstimateReport;
pub use sizing::PvSizing;
pub use stats::SeriesStats;
pub use stats::trend_pct;
