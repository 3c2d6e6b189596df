//! Color constants and auto-scaling helpers for the TUI.

use ratatui::style::Color;

/// Consumption bar color.
pub const BAR_COLOR: Color = Color::Yellow;
/// Moving-average line color.
pub const MA_COLOR: Color = Color::LightRed;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Sample-fallback indicator color.
pub const SAMPLE_SOURCE: Color = Color::Magenta;

/// Returns a color for the trend figure. Rising consumption is the thing
/// the report warns about, so positive is red.
pub fn trend_color(pct: f64) -> Color {
    if pct > 0.0 {
        Color::Red
    } else if pct < 0.0 {
        Color::Green
    } else {
        Color::DarkGray
    }
}

/// Computes Y-axis bounds for the consumption chart.
///
/// Bars are anchored at zero, so the lower bound stays zero and the upper
/// bound adds 10% headroom over the tallest point of either dataset.
pub fn chart_bounds(bars: &[(f64, f64)], line: &[(f64, f64)]) -> [f64; 2] {
    let max = bars
        .iter()
        .chain(line.iter())
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    if !max.is_finite() || max <= 0.0 {
        return [0.0, 1.0];
    }
    [0.0, max * 1.1]
}
