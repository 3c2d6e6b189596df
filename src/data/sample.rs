//! Built-in fallback consumption series.

use crate::data::series::{ConsumptionRecord, ConsumptionSeries, Month};

/// The fixed sample dataset: first half of 2025, kWh per month.
///
/// Used whenever the external source is absent or unreadable, so the report
/// always has something to show.
const SAMPLE: [(i32, u32, f64); 6] = [
    (2025, 1, 410.2),
    (2025, 2, 398.7),
    (2025, 3, 450.1),
    (2025, 4, 430.0),
    (2025, 5, 470.8),
    (2025, 6, 455.6),
];

/// Builds the built-in sample series.
pub fn sample_series() -> ConsumptionSeries {
    let records = SAMPLE
        .iter()
        .filter_map(|&(year, month, kwh)| {
            Month::new(year, month).map(|m| ConsumptionRecord::new(m, Some(kwh)))
        })
        .collect();
    // The literals above are unique, valid months; construction cannot fail.
    ConsumptionSeries::new(records).unwrap_or_default()
}
