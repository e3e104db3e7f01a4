//! Backend-independent description of the chart.
//!
//! Positions are in data space: x in tokens, y in GB. The renderer maps x
//! through [`plot_x`] onto a linear log2 axis.

use crate::hardware::{HardwareRef, Rgb, StrokePattern};
use crate::model::{ModelShape, DESIGN_LIMIT_TOKENS};
use crate::series::{MemorySeries, MAX_SEQ_LEN, MIN_SEQ_LEN};

/// Upper bound of the y axis in GB; the view is limited to edge-sized memory.
pub const Y_MAX_GB: f64 = 45.0;

/// Number of labelled x ticks (1k through 1M).
pub const X_TICK_COUNT: u32 = 11;

/// Map a token count onto the linear plotting axis.
#[must_use]
pub fn plot_x(seq_len: f64) -> f64 {
    seq_len.log2()
}

/// Short token label: `1024 -> "1k"`, `131072 -> "128k"`, `1048576 -> "1M"`.
#[must_use]
pub fn token_label(seq_len: f64) -> String {
    const MEGA: f64 = 1024.0 * 1024.0;
    if seq_len >= MEGA && (seq_len % MEGA) == 0.0 {
        format!("{}M", (seq_len / MEGA) as u64)
    } else {
        format!("{}k", (seq_len / 1024.0).round() as u64)
    }
}

/// Vertical anchor of a text block relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VAnchor {
    Bottom,
    Center,
}

/// Text placed in data space. Multi-line text uses `\n`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub seq_len: f64,
    pub gb: f64,
    pub color: Rgb,
    /// Font size in points
    pub size_pt: f64,
    pub bold: bool,
    pub anchor: VAnchor,
}

impl TextLabel {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub seq_len: f64,
    pub label: String,
}

/// Shaded constant band for the model weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightsBand {
    pub top_gb: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub legend: String,
}

/// Total memory curve with the KV region filled down to the weights band.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryCurve {
    /// `(seq_len, total_gb)` points, cut at the y axis ceiling
    pub points: Vec<(f64, f64)>,
    /// Every sample with y capped at the ceiling, so the fill spans the axis
    pub fill_points: Vec<(f64, f64)>,
    pub fill_baseline_gb: f64,
    pub color: Rgb,
    pub width_pt: f64,
    pub fill_alpha: f64,
    pub legend: String,
}

/// Horizontal line at a hardware capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub gb: f64,
    pub stroke: StrokePattern,
    pub width_pt: f64,
    pub alpha: f64,
    pub color: Rgb,
    pub label: TextLabel,
}

/// Vertical marker at the design-limit context length.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignLimit {
    pub seq_len: f64,
    pub total_gb: f64,
    pub color: Rgb,
    pub stroke: StrokePattern,
    pub width_pt: f64,
    pub label: TextLabel,
}

/// Everything drawn on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    /// `(min, max)` in tokens
    pub x_range: (f64, f64),
    /// `(min, max)` in GB
    pub y_range: (f64, f64),
    pub x_ticks: Vec<Tick>,
    pub weights: WeightsBand,
    pub curve: MemoryCurve,
    pub area_labels: Vec<TextLabel>,
    pub hardware: Vec<ReferenceLine>,
    pub design_limit: DesignLimit,
}

impl ChartLayout {
    /// Lay out the chart for `model` over `series` with the given references.
    #[must_use]
    pub fn build(model: &ModelShape, series: &MemorySeries, hardware: &[HardwareRef]) -> Self {
        let x_ticks = (0..X_TICK_COUNT)
            .map(|i| {
                let seq_len = MIN_SEQ_LEN * f64::from(1u32 << i);
                Tick { seq_len, label: token_label(seq_len) }
            })
            .collect();

        let weights = WeightsBand {
            top_gb: model.weights_gb_visual,
            color: Rgb::LIGHT_GREY,
            alpha: 0.3,
            legend: format!("Model Weights (~{:.0}GB)", model.weights_gb_visual),
        };

        let curve = MemoryCurve {
            points: clip_to_ceiling(series.total_points(), Y_MAX_GB),
            fill_points: series.total_points().map(|(x, y)| (x, y.min(Y_MAX_GB))).collect(),
            fill_baseline_gb: model.weights_gb_visual,
            color: Rgb::ORANGE,
            width_pt: 3.0,
            fill_alpha: 0.1,
            legend: "Total Memory Usage (Weights + KV)".to_string(),
        };

        let area_labels = vec![
            TextLabel {
                text: "Model Weights Area\n(FP16)".to_string(),
                seq_len: 1200.0,
                gb: model.weights_gb_visual / 2.0,
                color: Rgb::MID_GREY,
                size_pt: 10.0,
                bold: true,
                anchor: VAnchor::Center,
            },
            TextLabel {
                text: "KV Cache Area\n(FP16)".to_string(),
                seq_len: 270.0 * 1024.0,
                gb: 10.0,
                color: Rgb::ORANGE,
                size_pt: 10.0,
                bold: true,
                anchor: VAnchor::Center,
            },
        ];

        let hardware = hardware.iter().map(reference_line).collect();

        let limit_gb = model.total_gb(DESIGN_LIMIT_TOKENS);
        let design_limit = DesignLimit {
            seq_len: DESIGN_LIMIT_TOKENS,
            total_gb: limit_gb,
            color: Rgb::DARK_GREY,
            stroke: StrokePattern::Dotted,
            width_pt: 2.0,
            label: TextLabel {
                text: format!(
                    "Design Limit ({})\nRequires ~{limit_gb:.1} GB",
                    token_label(DESIGN_LIMIT_TOKENS)
                ),
                seq_len: DESIGN_LIMIT_TOKENS * 1.1,
                gb: limit_gb,
                color: Rgb::DARK_GREY,
                size_pt: 11.0,
                bold: false,
                anchor: VAnchor::Center,
            },
        };

        Self {
            title: format!("Edge Device Memory Bottleneck: {} (FP16)", model.name),
            x_desc: "Context Length (Tokens)".to_string(),
            y_desc: "Total Memory Usage (GB)".to_string(),
            // half an octave of margin on each side
            x_range: (MIN_SEQ_LEN / 2f64.sqrt(), MAX_SEQ_LEN * 2f64.sqrt()),
            y_range: (0.0, Y_MAX_GB),
            x_ticks,
            weights,
            curve,
            area_labels,
            hardware,
            design_limit,
        }
    }

    /// All text drawn in the plotting area, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &TextLabel> {
        self.area_labels
            .iter()
            .chain(self.hardware.iter().map(|h| &h.label))
            .chain(std::iter::once(&self.design_limit.label))
    }
}

fn reference_line(hw: &HardwareRef) -> ReferenceLine {
    let tier = hw.tier();
    ReferenceLine {
        gb: hw.memory_gb,
        stroke: tier.stroke(),
        width_pt: tier.line_width(),
        alpha: tier.alpha(),
        color: hw.color,
        label: TextLabel {
            text: format!("  {}", hw.label),
            seq_len: MIN_SEQ_LEN,
            gb: hw.memory_gb + hw.label_offset_gb(),
            color: hw.color,
            size_pt: 10.0,
            bold: true,
            anchor: VAnchor::Bottom,
        },
    }
}

/// Keep points up to the first one above `ceiling`, ending exactly on it.
///
/// The crossing is interpolated in plot space. Points after the first
/// crossing are dropped, so this expects a non-decreasing curve.
#[must_use]
pub fn clip_to_ceiling(points: impl IntoIterator<Item = (f64, f64)>, ceiling: f64) -> Vec<(f64, f64)> {
    let mut clipped: Vec<(f64, f64)> = Vec::new();
    for (x, y) in points {
        if y <= ceiling {
            clipped.push((x, y));
            continue;
        }
        if let Some(&(px, py)) = clipped.last() {
            let t = (ceiling - py) / (y - py);
            let cx = plot_x(px) + t * (plot_x(x) - plot_x(px));
            clipped.push((cx.exp2(), ceiling));
        }
        break;
    }
    clipped
}
