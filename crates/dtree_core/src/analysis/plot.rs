//! Plot description for risk sensitivity results.
//!
//! The crate does not draw anything. A sweep describes its chart to a
//! caller-supplied `PlotCanvas`, which may render it with any backend.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Line pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineStyle {
    Solid,
    Dashed,
    DashDot,
    Dotted,
}

impl LineStyle {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LineStyle::Solid => "-",
            LineStyle::Dashed => "--",
            LineStyle::DashDot => ".-",
            LineStyle::Dotted => ":",
        }
    }
}

/// Line color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineColor {
    Black,
    Red,
    Green,
}

impl LineColor {
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            LineColor::Black => "k",
            LineColor::Red => "r",
            LineColor::Green => "g",
        }
    }
}

/// A (style, color) pair assigned to a plotted series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineFormat {
    pub style: LineStyle,
    pub color: LineColor,
}

const fn fmt_of(style: LineStyle, color: LineColor) -> LineFormat {
    LineFormat { style, color }
}

/// Formats assigned to decision branches, in order
pub const LINE_FORMATS: [LineFormat; 12] = [
    fmt_of(LineStyle::Solid, LineColor::Black),
    fmt_of(LineStyle::Dashed, LineColor::Black),
    fmt_of(LineStyle::DashDot, LineColor::Black),
    fmt_of(LineStyle::Dotted, LineColor::Black),
    fmt_of(LineStyle::Solid, LineColor::Red),
    fmt_of(LineStyle::Dashed, LineColor::Red),
    fmt_of(LineStyle::DashDot, LineColor::Red),
    fmt_of(LineStyle::Dotted, LineColor::Red),
    fmt_of(LineStyle::Solid, LineColor::Green),
    fmt_of(LineStyle::Dashed, LineColor::Green),
    fmt_of(LineStyle::DashDot, LineColor::Green),
    fmt_of(LineStyle::Dotted, LineColor::Green),
];

impl LineFormat {
    /// Format for the `index`-th series; wraps after 12
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        LINE_FORMATS[index % LINE_FORMATS.len()]
    }
}

/// Formats as a matplotlib-style format string, e.g. `--r`
impl fmt::Display for LineFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.style.code(), self.color.code())
    }
}

/// Axis layout sent once all series are drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotAxes {
    /// Tick positions on the x axis (the risk aversion grid)
    pub x_ticks: Vec<f64>,
    /// Tick labels (risk tolerance labels)
    pub x_tick_labels: Vec<String>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub legend: bool,
    pub grid: bool,
}

/// Target of a plot.
pub trait PlotCanvas {
    /// Draw one series. `format` is `None` when the canvas should pick a
    /// style itself.
    fn line(&mut self, xs: &[f64], ys: &[f64], label: &str, format: Option<LineFormat>);

    /// Apply axis layout after all lines are drawn
    fn finish(&mut self, axes: &PlotAxes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_order() {
        let codes: Vec<String> = LINE_FORMATS.iter().map(ToString::to_string).collect();
        assert_eq!(
            codes,
            vec![
                "-k", "--k", ".-k", ":k", "-r", "--r", ".-r", ":r", "-g", "--g", ".-g", ":g"
            ]
        );
    }

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(LineFormat::cycle(0), LineFormat::cycle(12));
        assert_eq!(LineFormat::cycle(5), LineFormat::cycle(29));
        assert_eq!(LineFormat::cycle(11).to_string(), ":g");
    }
}
