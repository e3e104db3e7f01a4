//! Dash geometry for straight reference lines.
//!
//! Patterns are on/off lengths in points, scaled by the caller's `unit`
//! (plot-space length of one point times the line width).

use crate::hardware::StrokePattern;

impl StrokePattern {
    /// Alternating on/off lengths, starting with "on".
    #[must_use]
    pub fn lengths(self) -> &'static [f64] {
        match self {
            Self::Dashed => &[3.7, 1.6],
            Self::DashDot => &[6.4, 1.6, 1.0, 1.6],
            Self::Dotted => &[1.0, 1.65],
        }
    }
}

/// Visible intervals of a line from `start` to `end` stroked with `pattern`.
///
/// Intervals are ordered, non-overlapping and clamped to `[start, end]`.
/// Returns nothing when `end <= start` or `unit` is not positive.
#[must_use]
pub fn dash_intervals(start: f64, end: f64, pattern: StrokePattern, unit: f64) -> Vec<(f64, f64)> {
    if end <= start || unit <= 0.0 {
        return Vec::new();
    }
    let lengths = pattern.lengths();
    let mut intervals = Vec::new();
    let mut pos = start;
    for (i, len) in lengths.iter().cycle().enumerate() {
        if pos >= end {
            break;
        }
        let next = (pos + len * unit).min(end);
        if i % 2 == 0 {
            intervals.push((pos, next));
        }
        pos = next;
    }
    intervals
}
