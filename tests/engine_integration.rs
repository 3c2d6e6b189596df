//! Integration tests for report computation on loaded series.

mod common;

use solar_report::config::EstimationParams;
use solar_report::data::load;
use solar_report::engine::{EstimateReport, trend_pct};
use tempfile::tempdir;

/// Load `body` from a real file and compute the default report on it.
fn report_from_file(body: &str) -> EstimateReport {
    let dir = tempdir().expect("tempdir");
    let path = common::write_data_file(&dir, body);
    let loaded = load(&path).expect("valid file");
    EstimateReport::compute(&loaded.series, &EstimationParams::default())
}

#[test]
fn sample_file_report_matches_headline_numbers() {
    let report = report_from_file(common::sample_json());

    let stats = report.stats.expect("six readings");
    // mean = (410.2 + 398.7 + 450.1 + 430.0 + 470.8 + 455.6) / 6 = 435.9
    assert!((stats.mean_kwh - 435.9).abs() < 1e-9);
    assert_eq!(stats.max_kwh, 470.8);
    assert_eq!(stats.min_kwh, 398.7);
    assert_eq!(stats.known_count, 6);

    // recent = mean(430.0, 470.8, 455.6), prior = mean(410.2, 398.7, 450.1)
    let trend = report.trend_pct.expect("six months of history");
    assert!((trend - 7.7363).abs() < 1e-3);

    let sizing = report.sizing.expect("defined mean");
    // 400 Wp * 4.0 sun hours * 30 days = 48 kWh per panel per month
    assert!((sizing.panel_kwh_month - 48.0).abs() < 1e-9);
    assert_eq!(sizing.panel_count, 8);
    assert!((sizing.system_kwp - 3.2).abs() < 1e-9);
    // 435.9 * 0.8 * 650
    assert!((sizing.monthly_savings - 226_668.0).abs() < 1e-3);
}

#[test]
fn fallback_sample_and_identical_file_agree() {
    let dir = tempdir().expect("tempdir");
    let params = EstimationParams::default();

    let fallback = load(&dir.path().join("missing.json")).expect("fallback");
    let path = common::write_data_file(&dir, common::sample_json());
    let from_file = load(&path).expect("valid file");

    assert_eq!(
        EstimateReport::compute(&fallback.series, &params),
        EstimateReport::compute(&from_file.series, &params)
    );
}

#[test]
fn trend_needs_six_months_of_history() {
    let five = common::series_of(&[
        (2025, 1, Some(400.0)),
        (2025, 2, Some(410.0)),
        (2025, 3, Some(420.0)),
        (2025, 4, Some(430.0)),
        (2025, 5, Some(440.0)),
    ]);
    assert_eq!(trend_pct(&five), None, "five months cannot form two windows");

    let six = common::series_of(&[
        (2025, 1, Some(400.0)),
        (2025, 2, Some(410.0)),
        (2025, 3, Some(420.0)),
        (2025, 4, Some(430.0)),
        (2025, 5, Some(440.0)),
        (2025, 6, Some(450.0)),
    ]);
    assert!(trend_pct(&six).is_some());
}

#[test]
fn trend_is_undefined_when_prior_window_averages_zero() {
    let series = common::series_of(&[
        (2025, 1, Some(0.0)),
        (2025, 2, Some(0.0)),
        (2025, 3, Some(0.0)),
        (2025, 4, Some(400.0)),
        (2025, 5, Some(410.0)),
        (2025, 6, Some(420.0)),
    ]);
    assert_eq!(trend_pct(&series), None, "no baseline to compare against");
}

#[test]
fn stats_skip_missing_readings() {
    let series = common::series_of(&[
        (2025, 1, Some(100.0)),
        (2025, 2, None),
        (2025, 3, Some(300.0)),
        (2025, 4, None),
    ]);
    let report = EstimateReport::compute(&series, &EstimationParams::default());

    let stats = report.stats.expect("two known readings");
    assert_eq!(stats.known_count, 2);
    assert!((stats.mean_kwh - 200.0).abs() < 1e-9);
    assert_eq!(stats.max_kwh, 300.0);
    assert_eq!(stats.min_kwh, 100.0);
}

#[test]
fn moving_average_matches_hand_computed_values() {
    let report = report_from_file(common::sample_json());

    let expected = [
        None,
        None,
        Some(419.666_666_666_666_7), // (410.2 + 398.7 + 450.1) / 3
        Some(426.266_666_666_666_6), // (398.7 + 450.1 + 430.0) / 3
        Some(450.3),                 // (450.1 + 430.0 + 470.8) / 3
        Some(452.133_333_333_333_3), // (430.0 + 470.8 + 455.6) / 3
    ];
    assert_eq!(report.moving_average.len(), expected.len());
    for (i, (got, want)) in report.moving_average.iter().zip(expected).enumerate() {
        match (got, want) {
            (None, None) => {}
            (Some(g), Some(w)) => {
                assert!((g - w).abs() < 1e-9, "window {i}: got {g}, want {w}")
            }
            _ => panic!("window {i}: got {got:?}, want {want:?}"),
        }
    }
}

#[test]
fn moving_average_gap_undefines_touching_windows() {
    let series = common::series_of(&[
        (2025, 1, Some(100.0)),
        (2025, 2, Some(200.0)),
        (2025, 3, None),
        (2025, 4, Some(400.0)),
        (2025, 5, Some(500.0)),
    ]);
    let params = EstimationParams {
        ma_window: 2,
        ..EstimationParams::default()
    };
    let report = EstimateReport::compute(&series, &params);

    assert_eq!(
        report.moving_average,
        vec![None, Some(150.0), None, None, Some(450.0)]
    );
}

#[test]
fn out_of_range_parameters_are_clamped_by_the_engine() {
    let raw = EstimationParams {
        cost_per_kwh: -5.0,
        coverage_pct: 3.0,
        peak_sun_hours: 10.0,
        panel_wp: 1000,
        ma_window: 0,
    };
    let report = report_from_file(common::sample_json());
    let clamped = EstimateReport::compute(
        &common::series_of(&[(2025, 1, Some(435.9))]),
        &raw,
    )
    .params;

    assert_eq!(clamped.cost_per_kwh, 0.0);
    assert_eq!(clamped.coverage_pct, 10.0);
    assert_eq!(clamped.peak_sun_hours, 6.0);
    assert_eq!(clamped.panel_wp, 500);
    assert_eq!(clamped.ma_window, 2);

    // The default parameters pass through unchanged.
    assert_eq!(report.params, EstimationParams::default());
}

#[test]
fn halving_coverage_halves_the_panel_count() {
    let dir = tempdir().expect("tempdir");
    let path = common::write_data_file(&dir, common::sample_json());
    let loaded = load(&path).expect("valid file");

    let full = EstimateReport::compute(&loaded.series, &EstimationParams::default());
    let half = EstimateReport::compute(
        &loaded.series,
        &EstimationParams {
            coverage_pct: 40.0,
            ..EstimationParams::default()
        },
    );

    assert_eq!(full.sizing.expect("sized").panel_count, 8);
    assert_eq!(half.sizing.expect("sized").panel_count, 4);
}

#[test]
fn all_missing_readings_disable_stats_and_sizing() {
    let series = common::series_of(&[(2025, 1, None), (2025, 2, None)]);
    let report = EstimateReport::compute(&series, &EstimationParams::default());

    assert_eq!(report.stats, None);
    assert_eq!(report.sizing, None);
    assert_eq!(report.trend_pct, None);
    assert_eq!(report.moving_average, vec![None, None]);
}

#[test]
fn identical_inputs_produce_identical_reports() {
    let first = report_from_file(common::sample_json());
    let second = report_from_file(common::sample_json());

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}
