//! Whole-report computation from a series and a parameter set.

use std::fmt;

use crate::config::EstimationParams;
use crate::data::ConsumptionSeries;
use crate::engine::moving_average::moving_average;
use crate::engine::sizing::PvSizing;
use crate::engine::stats::{self, SeriesStats};

/// Everything the report presents, computed in one pass.
///
/// Deterministic in the series and the parameters: the same inputs always
/// produce the same report. Quantities the data cannot support are `None`
/// and render as `n/a`; the report never invents a number.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateReport {
    /// Parameters the report was computed with, after clamping.
    pub params: EstimationParams,
    /// Mean and extremes of the known readings, `None` when there are none.
    pub stats: Option<SeriesStats>,
    /// Recent-versus-prior consumption trend in percent.
    pub trend_pct: Option<f64>,
    /// Array sizing at the coverage target, `None` without a defined mean.
    pub sizing: Option<PvSizing>,
    /// Trailing moving average, aligned with the series records.
    pub moving_average: Vec<Option<f64>>,
}

impl EstimateReport {
    /// Computes the full report for a series.
    ///
    /// Accepts raw parameters and clamps them here, so every caller gets
    /// the same range enforcement. The clamped values are kept on the
    /// report for display.
    pub fn compute(series: &ConsumptionSeries, params: &EstimationParams) -> Self {
        let params = params.clamped();
        let stats = SeriesStats::from_series(series);
        let trend_pct = stats::trend_pct(series);
        let sizing = stats.and_then(|s| PvSizing::from_mean(s.mean_kwh, &params));
        let moving_average = moving_average(series, params.ma_window);

        Self {
            params,
            stats,
            trend_pct,
            sizing,
            moving_average,
        }
    }
}

impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Consumption ---")?;
        match &self.stats {
            Some(s) => {
                writeln!(f, "Mean:               {:.1} kWh/month", s.mean_kwh)?;
                writeln!(f, "Maximum:            {:.1} kWh", s.max_kwh)?;
                writeln!(f, "Minimum:            {:.1} kWh", s.min_kwh)?;
            }
            None => {
                writeln!(f, "Mean:               n/a")?;
                writeln!(f, "Maximum:            n/a")?;
                writeln!(f, "Minimum:            n/a")?;
            }
        }
        match self.trend_pct {
            Some(t) => writeln!(f, "Trend:              {t:+.2}%")?,
            None => writeln!(f, "Trend:              n/a")?,
        }

        writeln!(f, "--- PV Sizing ---")?;
        let p = &self.params;
        writeln!(
            f,
            "Panel:              {} Wp @ {:.1} peak sun hours",
            p.panel_wp, p.peak_sun_hours
        )?;
        writeln!(f, "Coverage target:    {:.0}%", p.coverage_pct)?;
        match &self.sizing {
            Some(s) => {
                writeln!(f, "Panel yield:        {:.1} kWh/month", s.panel_kwh_month)?;
                writeln!(f, "Panels required:    {}", s.panel_count)?;
                writeln!(f, "System size:        {:.2} kWp", s.system_kwp)?;
                write!(
                    f,
                    "Projected savings:  {:.0} per month at {:.2}/kWh",
                    s.monthly_savings, p.cost_per_kwh
                )
            }
            None => write!(f, "Sizing:             n/a (no usable readings)"),
        }
    }
}
