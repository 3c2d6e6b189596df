//! TOML-based estimation parameters with range validation and clamping.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Panel ratings offered by the sizing model (Wp).
pub const PANEL_WP_CHOICES: [u32; 5] = [330, 370, 400, 450, 500];

/// Parameters of the estimation engine, parsed from TOML.
///
/// All fields have defaults matching the stock report. Load from TOML with
/// [`EstimationParams::from_toml_file`] or start from
/// [`EstimationParams::default`]. The engine never trusts raw values: it
/// works on [`EstimationParams::clamped`], so out-of-range input degrades to
/// the nearest legal value instead of poisoning the report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EstimationParams {
    /// Electricity price used by the savings projection (per kWh, >= 0).
    pub cost_per_kwh: f64,
    /// Share of mean consumption the array should cover (10-100 %, steps of 5).
    pub coverage_pct: f64,
    /// Peak sun hours per day at the site (3.0-6.0, steps of 0.5).
    pub peak_sun_hours: f64,
    /// Rated power of one panel (one of [`PANEL_WP_CHOICES`]).
    pub panel_wp: u32,
    /// Moving-average window in months (2-6).
    pub ma_window: usize,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            cost_per_kwh: 650.0,
            coverage_pct: 80.0,
            peak_sun_hours: 4.0,
            panel_wp: 400,
            ma_window: 3,
        }
    }
}

/// Configuration error with field name and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Offending field (e.g., `"coverage_pct"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

/// Snaps `value` into `[lo, hi]` on the grid of `step`, falling back to
/// `fallback` for non-finite input.
fn snap(value: f64, lo: f64, hi: f64, step: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        return fallback;
    }
    let clamped = value.clamp(lo, hi);
    lo + ((clamped - lo) / step).round() * step
}

/// Nearest legal panel rating. Ties resolve to the smaller panel.
fn nearest_panel_wp(wp: u32) -> u32 {
    PANEL_WP_CHOICES
        .iter()
        .copied()
        .min_by_key(|choice| choice.abs_diff(wp))
        .unwrap_or(400)
}

impl EstimationParams {
    /// Parses parameters from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "params".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses parameters from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if every parameter sits on its legal grid.
    /// This is the strict check for user-supplied files; the engine itself
    /// uses [`EstimationParams::clamped`] and never rejects.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !self.cost_per_kwh.is_finite() || self.cost_per_kwh < 0.0 {
            errors.push(ConfigError {
                field: "cost_per_kwh".into(),
                message: "must be >= 0".into(),
            });
        }
        if !(10.0..=100.0).contains(&self.coverage_pct) {
            errors.push(ConfigError {
                field: "coverage_pct".into(),
                message: "must be in [10, 100]".into(),
            });
        } else if self.coverage_pct % 5.0 != 0.0 {
            errors.push(ConfigError {
                field: "coverage_pct".into(),
                message: "must be a multiple of 5".into(),
            });
        }
        if !(3.0..=6.0).contains(&self.peak_sun_hours) {
            errors.push(ConfigError {
                field: "peak_sun_hours".into(),
                message: "must be in [3.0, 6.0]".into(),
            });
        } else if self.peak_sun_hours % 0.5 != 0.0 {
            errors.push(ConfigError {
                field: "peak_sun_hours".into(),
                message: "must be a multiple of 0.5".into(),
            });
        }
        if !PANEL_WP_CHOICES.contains(&self.panel_wp) {
            errors.push(ConfigError {
                field: "panel_wp".into(),
                message: format!(
                    "must be one of {}",
                    PANEL_WP_CHOICES.map(|w| w.to_string()).join(", ")
                ),
            });
        }
        if !(2..=6).contains(&self.ma_window) {
            errors.push(ConfigError {
                field: "ma_window".into(),
                message: "must be in [2, 6]".into(),
            });
        }

        errors
    }

    /// Returns a copy with every parameter forced onto its legal grid.
    ///
    /// Out-of-range values move to the nearest bound, off-grid values to the
    /// nearest step, and non-finite values to the default.
    pub fn clamped(&self) -> Self {
        let cost_per_kwh = if self.cost_per_kwh.is_finite() {
            self.cost_per_kwh.max(0.0)
        } else {
            650.0
        };
        Self {
            cost_per_kwh,
            coverage_pct: snap(self.coverage_pct, 10.0, 100.0, 5.0, 80.0),
            peak_sun_hours: snap(self.peak_sun_hours, 3.0, 6.0, 0.5, 4.0),
            panel_wp: nearest_panel_wp(self.panel_wp),
            ma_window: self.ma_window.clamp(2, 6),
        }
    }

    /// Moves the electricity price by `delta`, never below zero.
    pub fn step_cost(&mut self, delta: f64) {
        let next = self.clamped().cost_per_kwh + delta;
        self.cost_per_kwh = next.max(0.0);
    }

    /// Moves the coverage target by `delta` percentage points.
    pub fn step_coverage(&mut self, delta: f64) {
        self.coverage_pct = snap(self.clamped().coverage_pct + delta, 10.0, 100.0, 5.0, 80.0);
    }

    /// Moves the peak-sun-hours figure by `delta`.
    pub fn step_sun_hours(&mut self, delta: f64) {
        self.peak_sun_hours = snap(self.clamped().peak_sun_hours + delta, 3.0, 6.0, 0.5, 4.0);
    }

    /// Cycles the panel rating through [`PANEL_WP_CHOICES`], wrapping at the ends.
    pub fn cycle_panel_wp(&mut self, forward: bool) {
        let current = nearest_panel_wp(self.panel_wp);
        let idx = PANEL_WP_CHOICES
            .iter()
            .position(|&w| w == current)
            .unwrap_or(0);
        let len = PANEL_WP_CHOICES.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.panel_wp = PANEL_WP_CHOICES[next];
    }

    /// Widens or narrows the moving-average window, staying in [2, 6].
    pub fn step_window(&mut self, delta: isize) {
        let next = self.clamped().ma_window as isize + delta;
        self.ma_window = next.clamp(2, 6) as usize;
    }
}
