//! PV array sizing and savings projection.

use crate::config::EstimationParams;

/// Average days per month assumed by the production model.
const DAYS_PER_MONTH: f64 = 30.0;

/// PV array sizing derived from mean monthly consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvSizing {
    /// Monthly yield of a single panel (kWh).
    pub panel_kwh_month: f64,
    /// Panels needed to reach the coverage target.
    pub panel_count: u32,
    /// Rated array power (kWp).
    pub system_kwp: f64,
    /// Projected monthly savings at the configured price.
    pub monthly_savings: f64,
}

impl PvSizing {
    /// Sizes an array covering `coverage_pct` of `mean_kwh` per month.
    ///
    /// One panel yields `wp / 1000 * peak_sun_hours * 30` kWh per month;
    /// the panel count is rounded up so the target is met, not approached.
    /// A non-positive per-panel yield has nothing to divide by, so the
    /// sizing is undefined. Clamped parameters never produce one, but the
    /// guard keeps the function total on raw input.
    pub fn from_mean(mean_kwh: f64, params: &EstimationParams) -> Option<Self> {
        let panel_kwh_month =
            f64::from(params.panel_wp) / 1000.0 * params.peak_sun_hours * DAYS_PER_MONTH;
        if panel_kwh_month <= 0.0 {
            return None;
        }

        let target_kwh = mean_kwh * params.coverage_pct / 100.0;
        let panel_count = (target_kwh / panel_kwh_month).ceil().max(0.0) as u32;

        Some(Self {
            panel_kwh_month,
            panel_count,
            system_kwp: f64::from(panel_count) * f64::from(params.panel_wp) / 1000.0,
            monthly_savings: target_kwh * params.cost_per_kwh,
        })
    }
}
