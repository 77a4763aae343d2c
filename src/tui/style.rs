//! Color constants and auto-scaling helpers for the chart.

use ratatui::style::Color;

/// Load line color.
pub const LOAD_COLOR: Color = Color::Cyan;
/// Operating-hour marker color.
pub const OPERATING_COLOR: Color = Color::Yellow;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Error message color.
pub const ERROR_FG: Color = Color::Red;

/// Computes Y-axis bounds from chart points with 10% padding.
///
/// The lower bound never drops below zero since loads are non-negative.
pub fn auto_bounds_y(points: &[(f64, f64)]) -> [f64; 2] {
    let ys = points.iter().map(|&(_, y)| y);
    let min = ys.clone().fold(f64::INFINITY, f64::min);
    let max = ys.fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let range = (max - min).max(0.1);
    let pad = range * 0.1;
    [(min - pad).max(0.0), max + pad]
}
