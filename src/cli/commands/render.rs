//! Default command: write the chart, then preview it

use std::io::IsTerminal;

use super::describe;
use crate::chart::{render_chart, render_preview};
use crate::cli::logging::{enabled, log};
use crate::cli::LogLevel;
use crate::config::{resolve_render_config, RenderArgs, RenderConfig};
use crate::model::QWEN_4B_FP16;
use crate::series::MemorySeries;

pub fn run_render(args: &RenderArgs, level: LogLevel) -> Result<(), String> {
    let config = resolve_render_config(args).map_err(describe)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Rendering {}x{} chart for {} to {}",
            config.width,
            config.height,
            QWEN_4B_FP16.name,
            config.output.display()
        ),
    );

    let report = render_chart(&config).map_err(describe)?;

    log(level, LogLevel::Normal, &format!("Saved {}", report.output.display()));
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  {} samples, {} bytes, design limit needs {:.2} GB",
            report.samples, report.bytes_written, report.design_limit_gb
        ),
    );

    if config.preview && enabled(level, LogLevel::Normal) && std::io::stdout().is_terminal() {
        show_preview(&config, level);
    }

    Ok(())
}

/// Best effort: a failed preview never fails the command.
fn show_preview(config: &RenderConfig, level: LogLevel) {
    let series = MemorySeries::default_for(&QWEN_4B_FP16);
    match render_preview(
        &series,
        QWEN_4B_FP16.weights_gb_visual,
        config.preview_mode,
        config.preview_width,
        config.preview_height,
    ) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => log(level, LogLevel::Verbose, &format!("Preview skipped: {e}")),
    }
}
