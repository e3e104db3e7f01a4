//! Chart layout, SVG rendering and terminal preview.

mod dash;
mod layout;
mod preview;
mod render;

pub use dash::dash_intervals;
pub use layout::{
    clip_to_ceiling, plot_x, token_label, ChartLayout, DesignLimit, MemoryCurve, ReferenceLine,
    TextLabel, Tick, VAnchor, WeightsBand, X_TICK_COUNT, Y_MAX_GB,
};
pub use preview::{render_preview, sample_indices, PreviewMode};
pub use render::render_svg;

use std::path::PathBuf;

use crate::config::RenderConfig;
use crate::error::{KvChartError, Result};
use crate::hardware::EDGE_REFERENCES;
use crate::model::QWEN_4B_FP16;
use crate::series::MemorySeries;

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport {
    pub output: PathBuf,
    pub bytes_written: u64,
    pub samples: usize,
    pub design_limit_gb: f64,
}

/// Compute the series, lay out the chart and write it to `config.output`.
pub fn render_chart(config: &RenderConfig) -> Result<RenderReport> {
    let series = MemorySeries::default_for(&QWEN_4B_FP16);
    let layout = ChartLayout::build(&QWEN_4B_FP16, &series, &EDGE_REFERENCES);

    render_svg(&layout, &config.output, (config.width, config.height))?;

    let bytes_written = std::fs::metadata(&config.output)
        .map_err(|e| KvChartError::io(format!("reading {}", config.output.display()), e))?
        .len();
    if bytes_written == 0 {
        return Err(KvChartError::render(&config.output, "backend produced an empty file"));
    }

    Ok(RenderReport {
        output: config.output.clone(),
        bytes_written,
        samples: series.len(),
        design_limit_gb: layout.design_limit.total_gb,
    })
}
