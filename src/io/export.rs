//! CSV export of a consumption series.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::data::ConsumptionSeries;

/// Column header for consumption CSV export.
const HEADER: &str = "month,kwh";

/// Exports a consumption series to a CSV file at the given path.
///
/// Writes a header row followed by one data row per record in month order.
/// Produces deterministic output for identical inputs.
///
/// # Arguments
///
/// * `series` - Series to export
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(series: &ConsumptionSeries, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(series, buf)
}

/// Writes a consumption series as CSV to any writer.
///
/// Energy values are written in the shortest decimal form that parses back
/// to the identical `f64`, so a re-import reproduces the series exactly.
/// Missing readings export as an empty field.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(series: &ConsumptionSeries, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(','))?;

    // Data rows
    for record in series.records() {
        let kwh = record.kwh.map(|v| v.to_string()).unwrap_or_default();
        wtr.write_record(&[record.month.to_string(), kwh])?;
    }

    wtr.flush()?;
    Ok(())
}
