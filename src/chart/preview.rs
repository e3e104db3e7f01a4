//! Terminal preview of the memory curve using trueno-viz.
//!
//! Samples are geometrically spaced, so plotting them by index already gives
//! a log2 x axis.

use serde::{Deserialize, Serialize};
use trueno_viz::output::{TerminalEncoder, TerminalMode as TruenoTerminalMode};
use trueno_viz::plots::{LossCurve, MetricSeries};
use trueno_viz::prelude::Rgba;

use super::layout::Y_MAX_GB;
use crate::error::{KvChartError, Result};
use crate::hardware::Rgb;
use crate::series::MemorySeries;

/// Terminal rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewMode {
    /// ASCII only (widest compatibility)
    Ascii,
    /// Unicode half blocks
    #[default]
    Unicode,
    /// ANSI true color
    Ansi,
}

impl PreviewMode {
    fn encoder_mode(self) -> TruenoTerminalMode {
        match self {
            Self::Ascii => TruenoTerminalMode::Ascii,
            Self::Unicode => TruenoTerminalMode::UnicodeHalfBlock,
            Self::Ansi => TruenoTerminalMode::AnsiTrueColor,
        }
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        Rgba::rgb(c.0, c.1, c.2)
    }
}

/// Every `step`-th index so that at most `max_points` samples remain.
///
/// The last sample is always kept.
#[must_use]
pub fn sample_indices(len: usize, max_points: usize) -> Vec<usize> {
    if len == 0 || max_points == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(max_points).max(1);
    let mut indices: Vec<usize> = (0..len).step_by(step).collect();
    if indices.last() != Some(&(len - 1)) {
        if indices.len() == max_points {
            indices.pop();
        }
        indices.push(len - 1);
    }
    indices
}

/// Render the total-memory curve and the weights level for a terminal.
///
/// `width` is in character cells. Values above the chart's y ceiling are
/// flattened onto it, matching the saved chart.
pub fn render_preview(
    series: &MemorySeries,
    weights_gb: f64,
    mode: PreviewMode,
    width: u32,
    height: u32,
) -> Result<String> {
    let indices = sample_indices(series.len(), width as usize);
    if indices.len() < 2 {
        return Err(KvChartError::Preview { message: "not enough samples".to_string() });
    }

    let mut curve = LossCurve::new()
        .add_series(MetricSeries::new("Total GB", Rgba::from(Rgb::ORANGE)))
        .add_series(MetricSeries::new("Weights GB", Rgba::from(Rgb::LIGHT_GREY)))
        .margin(2)
        .best_markers(false)
        .lower_is_better(true)
        .build()
        .map_err(|e| KvChartError::Preview { message: format!("failed to build curve: {e}") })?;

    let totals = series.total_gb();
    for &i in &indices {
        curve.push_all(&[totals[i].min(Y_MAX_GB) as f32, weights_gb as f32]);
    }

    let fb = curve
        .to_framebuffer()
        .map_err(|e| KvChartError::Preview { message: format!("failed to rasterize curve: {e}") })?;

    let encoder = TerminalEncoder::new()
        .mode(mode.encoder_mode())
        .width(width)
        .height(height / 2); // Terminal chars are ~2:1 aspect

    Ok(encoder.render(&fb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QWEN_4B_FP16;

    #[test]
    fn test_sample_indices_keeps_endpoints() {
        let indices = sample_indices(500, 80);
        assert_eq!(indices[0], 0);
        assert_eq!(*indices.last().unwrap(), 499);
        assert!(indices.len() <= 80);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sample_indices_small_inputs() {
        assert!(sample_indices(0, 10).is_empty());
        assert!(sample_indices(10, 0).is_empty());
        assert_eq!(sample_indices(3, 10), vec![0, 1, 2]);
    }

    #[test]
    fn test_sample_indices_exact_fit() {
        assert_eq!(sample_indices(4, 2), vec![0, 3]);
    }

    #[test]
    fn test_preview_mode_default() {
        assert_eq!(PreviewMode::default(), PreviewMode::Unicode);
    }

    #[test]
    fn test_render_preview_produces_output() {
        let series = MemorySeries::default_for(&QWEN_4B_FP16);
        let rendered = render_preview(&series, 8.0, PreviewMode::Ascii, 80, 24).unwrap();
        assert!(!rendered.is_empty());
    }

    #[test]
    fn test_render_preview_rejects_single_sample() {
        let series = MemorySeries::compute(&QWEN_4B_FP16, vec![1024.0]);
        assert!(render_preview(&series, 8.0, PreviewMode::Unicode, 80, 24).is_err());
    }
}
