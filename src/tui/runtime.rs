//! TUI application state and recomputation.

use std::path::PathBuf;

use crate::config::EstimationParams;
use crate::data::{LoadError, LoadedSeries, SeriesCache};
use crate::engine::EstimateReport;
use crate::io::export::export_csv;

/// TUI application state.
///
/// Every parameter change goes through one of the `adjust_*` methods, which
/// recompute the report immediately. The screen always shows a report that
/// matches the parameters on it.
pub struct App {
    /// Loaded series with its origin.
    pub loaded: LoadedSeries,
    /// Raw parameters. The report carries the clamped copy for display.
    pub params: EstimationParams,
    /// Report for the current series and parameters.
    pub report: EstimateReport,
    /// Source path used for reloads.
    pub data_path: PathBuf,
    /// One-line outcome of the last export or reload.
    pub status: Option<String>,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Fingerprint cache backing `r`.
    cache: SeriesCache,
}

impl App {
    /// Loads the series and computes the initial report.
    ///
    /// # Errors
    ///
    /// Returns the load error when `data_path` exists but cannot be parsed.
    /// An absent file is not an error; the built-in sample takes over.
    pub fn new(data_path: PathBuf, params: EstimationParams) -> Result<Self, LoadError> {
        let mut cache = SeriesCache::new();
        let loaded = cache.load(&data_path)?;
        let report = EstimateReport::compute(&loaded.series, &params);
        Ok(Self {
            loaded,
            params,
            report,
            data_path,
            status: None,
            quit: false,
            cache,
        })
    }

    fn recompute(&mut self) {
        self.report = EstimateReport::compute(&self.loaded.series, &self.params);
    }

    /// Moves the electricity price and recomputes.
    pub fn adjust_cost(&mut self, delta: f64) {
        self.params.step_cost(delta);
        self.recompute();
    }

    /// Moves the coverage target and recomputes.
    pub fn adjust_coverage(&mut self, delta: f64) {
        self.params.step_coverage(delta);
        self.recompute();
    }

    /// Moves the peak-sun-hours figure and recomputes.
    pub fn adjust_sun_hours(&mut self, delta: f64) {
        self.params.step_sun_hours(delta);
        self.recompute();
    }

    /// Cycles the panel rating and recomputes.
    pub fn cycle_panel(&mut self, forward: bool) {
        self.params.cycle_panel_wp(forward);
        self.recompute();
    }

    /// Widens or narrows the moving-average window and recomputes.
    pub fn adjust_window(&mut self, delta: isize) {
        self.params.step_window(delta);
        self.recompute();
    }

    /// Resets all parameters to their defaults.
    pub fn reset_params(&mut self) {
        self.params = EstimationParams::default();
        self.recompute();
        self.status = Some("parameters reset".to_string());
    }

    /// Reloads the series through the cache.
    ///
    /// A file that broke since the last load keeps the previous series on
    /// screen and puts the error in the status line instead.
    pub fn reload(&mut self) {
        match self.cache.load(&self.data_path) {
            Ok(loaded) => {
                self.status = Some(format!(
                    "reloaded {} records from {}",
                    loaded.series.len(),
                    loaded.source
                ));
                self.loaded = loaded;
                self.recompute();
            }
            Err(e) => self.status = Some(format!("reload failed: {e}")),
        }
    }

    /// Where `e` writes the CSV: the data path with a `.csv` extension.
    pub fn export_path(&self) -> PathBuf {
        self.data_path.with_extension("csv")
    }

    /// Exports the current series as CSV next to the data file.
    pub fn export(&mut self) {
        let path = self.export_path();
        match export_csv(&self.loaded.series, &path) {
            Ok(()) => self.status = Some(format!("exported to {}", path.display())),
            Err(e) => self.status = Some(format!("export failed: {e}")),
        }
    }
}
