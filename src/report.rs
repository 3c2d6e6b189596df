//! Plain-text rendering of the full report.
//!
//! Formatting lives in one place so the engine stays numeric and output
//! changes are localized.

use crate::data::{ConsumptionSeries, LoadedSeries};
use crate::engine::EstimateReport;

/// Formats the complete report: source header, consumption table and the
/// estimate block.
pub fn format_report(loaded: &LoadedSeries, report: &EstimateReport) -> String {
    let mut out = String::new();

    out.push_str("=== Monthly Consumption Report ===\n");
    out.push_str(&format!("Source: {}\n", loaded.source));
    out.push_str(&format!("Months: {}\n", describe_span(&loaded.series)));
    out.push('\n');

    out.push_str(&consumption_table(&loaded.series, &report.moving_average));
    out.push('\n');

    out.push_str(&report.to_string());
    out.push('\n');
    out.push_str(&sizing_summary(report));
    out.push('\n');

    out
}

/// Formats the `month | kwh | avg` table.
///
/// `ma` is the moving average aligned with the series records; undefined
/// cells render as `n/a`.
pub fn consumption_table(series: &ConsumptionSeries, ma: &[Option<f64>]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:<8} {:>10} {:>10}\n", "month", "kwh", "avg"));
    out.push_str(&format!("{:-<8} {:-<10} {:-<10}\n", "", "", ""));

    for (i, record) in series.records().iter().enumerate() {
        out.push_str(&format!(
            "{:<8} {:>10} {:>10}\n",
            record.month.to_string(),
            fmt_kwh(record.kwh),
            fmt_kwh(ma.get(i).copied().flatten()),
        ));
    }

    out
}

/// One-sentence sizing summary for the configured coverage target.
pub fn sizing_summary(report: &EstimateReport) -> String {
    match (&report.sizing, &report.stats) {
        (Some(sizing), Some(stats)) => format!(
            "Covering {:.0}% of the {:.1} kWh monthly average takes about {} x {} Wp panels \
             ({:.2} kWp), saving around {:.0} per month.",
            report.params.coverage_pct,
            stats.mean_kwh,
            sizing.panel_count,
            report.params.panel_wp,
            sizing.system_kwp,
            sizing.monthly_savings,
        ),
        _ => "No usable readings, so the array cannot be sized.".to_string(),
    }
}

fn describe_span(series: &ConsumptionSeries) -> String {
    match series.span() {
        Some((first, last)) => format!("{} ({first} to {last})", series.len()),
        None => "0".to_string(),
    }
}

fn fmt_kwh(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "n/a".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EstimationParams;
    use crate::data::{SeriesSource, sample_series};

    fn sample_loaded() -> LoadedSeries {
        LoadedSeries {
            series: sample_series(),
            source: SeriesSource::Sample,
        }
    }

    #[test]
    fn table_has_one_row_per_record() {
        let loaded = sample_loaded();
        let report = EstimateReport::compute(&loaded.series, &EstimationParams::default());
        let table = consumption_table(&loaded.series, &report.moving_average);
        // header + separator + 6 data rows
        assert_eq!(table.lines().count(), 8);
        assert!(table.contains("2025-01"));
        assert!(table.contains("410.2"));
    }

    #[test]
    fn table_marks_warmup_rows() {
        let loaded = sample_loaded();
        let report = EstimateReport::compute(&loaded.series, &EstimationParams::default());
        let table = consumption_table(&loaded.series, &report.moving_average);
        let rows: Vec<&str> = table.lines().skip(2).collect();
        // Default window of 3: first two smoothed cells are undefined.
        assert!(rows[0].ends_with("n/a"));
        assert!(rows[1].ends_with("n/a"));
        assert!(!rows[2].ends_with("n/a"));
    }

    #[test]
    fn summary_names_the_panel_count() {
        let loaded = sample_loaded();
        let report = EstimateReport::compute(&loaded.series, &EstimationParams::default());
        let summary = sizing_summary(&report);
        assert!(summary.contains("8 x 400 Wp"));
        assert!(summary.contains("3.20 kWp"));
    }

    #[test]
    fn summary_degrades_without_readings() {
        let report =
            EstimateReport::compute(&ConsumptionSeries::default(), &EstimationParams::default());
        assert!(sizing_summary(&report).contains("cannot be sized"));
    }

    #[test]
    fn full_report_names_the_source() {
        let loaded = sample_loaded();
        let report = EstimateReport::compute(&loaded.series, &EstimationParams::default());
        let text = format_report(&loaded, &report);
        assert!(text.contains("Source: built-in sample"));
        assert!(text.contains("Months: 6 (2025-01 to 2025-06)"));
        assert!(text.contains("--- PV Sizing ---"));
    }
}
