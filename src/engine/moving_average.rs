//! Trailing moving average with strict windows.

use crate::data::ConsumptionSeries;

/// Trailing mean over `window` consecutive records.
///
/// The result is aligned with the series: one slot per record. A slot is
/// `None` until `window` records have accumulated and whenever its window
/// contains a missing reading, so a gap in the history shows as a gap in
/// the smoothed line instead of a fabricated value.
pub fn moving_average(series: &ConsumptionSeries, window: usize) -> Vec<Option<f64>> {
    let records = series.records();
    let mut out = vec![None; records.len()];
    if window == 0 || records.len() < window {
        return out;
    }

    for i in (window - 1)..records.len() {
        let mut sum = 0.0;
        let mut complete = true;
        for record in &records[i + 1 - window..=i] {
            match record.kwh {
                Some(kwh) => sum += kwh,
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}
