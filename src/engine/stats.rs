//! Descriptive statistics over a consumption series.

use crate::data::{ConsumptionRecord, ConsumptionSeries};

/// Number of trailing records in each trend window.
const TREND_WINDOW: usize = 3;

/// Mean and extremes of the known readings in a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStats {
    /// Mean of the known readings (kWh per month).
    pub mean_kwh: f64,
    /// Largest known reading (kWh).
    pub max_kwh: f64,
    /// Smallest known reading (kWh).
    pub min_kwh: f64,
    /// Number of readings that contributed.
    pub known_count: usize,
}

impl SeriesStats {
    /// Computes statistics over the non-missing readings.
    ///
    /// Missing readings are skipped rather than treated as zero. Returns
    /// `None` when the series holds no usable reading at all.
    pub fn from_series(series: &ConsumptionSeries) -> Option<Self> {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for kwh in series.known_kwh() {
            count += 1;
            sum += kwh;
            max = max.max(kwh);
            min = min.min(kwh);
        }

        if count == 0 {
            return None;
        }
        Some(Self {
            mean_kwh: sum / count as f64,
            max_kwh: max,
            min_kwh: min,
            known_count: count,
        })
    }
}

/// Recent-versus-prior consumption trend in percent.
///
/// Compares the mean of the last three records against the mean of the
/// three before them. Positive means consumption is rising. Undefined
/// (`None`) when fewer than six records exist, when either window holds no
/// known reading, or when the prior mean is zero.
pub fn trend_pct(series: &ConsumptionSeries) -> Option<f64> {
    let records = series.records();
    if records.len() < 2 * TREND_WINDOW {
        return None;
    }

    let split = records.len() - TREND_WINDOW;
    let recent = window_mean(&records[split..]);
    let prior = window_mean(&records[split - TREND_WINDOW..split]);

    match (recent, prior) {
        (Some(recent), Some(prior)) if prior != 0.0 => Some((recent - prior) / prior * 100.0),
        _ => None,
    }
}

/// Mean of the known readings in a window, `None` when all are missing.
fn window_mean(records: &[ConsumptionRecord]) -> Option<f64> {
    let mut count = 0usize;
    let mut sum = 0.0;
    for record in records {
        if let Some(kwh) = record.kwh {
            count += 1;
            sum += kwh;
        }
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
