//! File output for report data.

/// CSV export of the consumption series.
pub mod export;

pub use export::export_csv;
pub use export::write_csv;
