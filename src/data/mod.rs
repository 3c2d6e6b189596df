//! Consumption history: record model, loading, fallback and caching.

/// Fingerprint-based reuse of a loaded series.
pub mod cache;
/// JSON loading with built-in sample fallback.
pub mod loader;
/// Built-in demonstration series.
pub mod sample;
pub mod series;

// Re-export the main types for convenience
pub use cache::SeriesCache;
pub use loader::LoadError;
pub use loader::LoadedSeries;
pub use loader::SeriesSource;
pub use loader::load;
pub use sample::sample_series;
pub use series::ConsumptionRecord;
pub use series::ConsumptionSeries;
pub use series::Month;
