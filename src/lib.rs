//! Deterministic monthly electricity consumption report with PV sizing.

pub mod config;
/// Consumption history: records, loading, fallback and caching.
pub mod data;
pub mod engine;
pub mod io;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;
