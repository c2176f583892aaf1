//! Non-fatal anomalies found while laying out or materializing a screen.
//!
//! The solver and materializer collect these instead of logging directly, so
//! their results can be asserted on. [`Screen`](crate::screen::Screen) logs
//! them once per pass.

use std::fmt;

/// A configuration anomaly attributed to one widget.
///
/// `widget` is the widget's `id` property, or its kind name in angle
/// brackets when it has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A container's `layout` is neither `horizontal-row` nor `vertical-row`.
    UnknownLayout { widget: String, layout: String },
    /// A vertical-row child's `align` is not `left`, `center` or `right`.
    UnknownAlignment { widget: String, align: String },
    /// A `proportion` that is not a non-negative integer.
    InvalidProportion { widget: String, value: String },
    /// A coordinate or extent that is neither pixels nor a percentage.
    InvalidLength {
        widget: String,
        key: &'static str,
        value: String,
    },
    /// A leaf reached materialization with a width or height below one.
    MissingDimensions { widget: String },
    /// A leaf reached materialization with an unset coordinate.
    MissingPosition { widget: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLayout { widget, layout } => {
                write!(f, "unknown layout '{layout}' in widget {widget}")
            },
            Self::UnknownAlignment { widget, align } => {
                write!(f, "alignment '{align}' is unknown in widget {widget}")
            },
            Self::InvalidProportion { widget, value } => {
                write!(f, "proportion '{value}' is not a number in widget {widget}")
            },
            Self::InvalidLength { widget, key, value } => {
                write!(f, "{key} '{value}' is not a length in widget {widget}")
            },
            Self::MissingDimensions { widget } => write!(f, "widget {widget} has no dimensions"),
            Self::MissingPosition { widget } => write!(f, "widget {widget} has no position"),
        }
    }
}

/// Emit every diagnostic as a warning, prefixed with the screen name.
pub fn log_diagnostics(screen: &str, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        log::warn!("{screen}: {diagnostic}");
    }
}
