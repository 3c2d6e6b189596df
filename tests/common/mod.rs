//! Shared test fixtures for integration tests.

use std::fs;
use std::path::PathBuf;

use solar_report::data::{ConsumptionRecord, ConsumptionSeries, Month};
use tempfile::TempDir;

/// Writes `body` to `consumption.json` inside `dir` and returns the path.
pub fn write_data_file(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("consumption.json");
    fs::write(&path, body).unwrap();
    path
}

/// JSON body matching the built-in sample series.
pub fn sample_json() -> &'static str {
    r#"[
        {"month": "2025-01", "kwh": 410.2},
        {"month": "2025-02", "kwh": 398.7},
        {"month": "2025-03", "kwh": 450.1},
        {"month": "2025-04", "kwh": 430.0},
        {"month": "2025-05", "kwh": 470.8},
        {"month": "2025-06", "kwh": 455.6}
    ]"#
}

/// Builds a series from `(year, month, kwh)` triples, `None` marking a
/// missing reading.
pub fn series_of(values: &[(i32, u32, Option<f64>)]) -> ConsumptionSeries {
    let records = values
        .iter()
        .map(|&(year, month, kwh)| ConsumptionRecord {
            month: Month::new(year, month).unwrap(),
            kwh,
        })
        .collect();
    ConsumptionSeries::new(records).unwrap()
}
