//! Render settings: defaults, YAML loading, CLI overrides, validation.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::cli::RenderArgs;
use crate::chart::PreviewMode;
use crate::error::{KvChartError, Result};

/// File the chart is written to unless overridden.
pub const DEFAULT_OUTPUT: &str = "kv_cache_edge_device.svg";

/// How and where the chart is drawn. Never affects what is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Output SVG path
    pub output: PathBuf,
    /// Canvas width in pixels (12 in at 150 dpi)
    pub width: u32,
    /// Canvas height in pixels (7.5 in at 150 dpi)
    pub height: u32,
    /// Show the terminal preview after saving
    pub preview: bool,
    pub preview_mode: PreviewMode,
    /// Preview width in character cells
    pub preview_width: u32,
    /// Preview height in pixel rows
    pub preview_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            width: 1800,
            height: 1125,
            preview: true,
            preview_mode: PreviewMode::Unicode,
            preview_width: 80,
            preview_height: 24,
        }
    }
}

/// Load render settings from a YAML file and validate them.
pub fn load_render_config<P: AsRef<Path>>(config_path: P) -> Result<RenderConfig> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => KvChartError::ConfigNotFound { path: path.to_path_buf() },
        _ => KvChartError::io(format!("reading {}", path.display()), e),
    })?;

    let config: RenderConfig =
        serde_yaml::from_str(&yaml_content).map_err(|e| KvChartError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_config(&config)?;
    Ok(config)
}

/// Resolve the effective settings: file (or defaults), then CLI flags.
pub fn resolve_render_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => load_render_config(path)?,
        None => RenderConfig::default(),
    };
    apply_overrides(&mut config, args);
    validate_config(&config)?;
    Ok(config)
}

/// Apply command-line overrides to the settings.
pub fn apply_overrides(config: &mut RenderConfig, args: &RenderArgs) {
    if let Some(output) = &args.output {
        config.output = output.clone();
    }
    if args.no_preview {
        config.preview = false;
    }
}

fn invalid(field: &str, message: impl Into<String>, suggestion: impl Into<String>) -> KvChartError {
    KvChartError::ConfigValue {
        field: field.to_string(),
        message: message.into(),
        suggestion: suggestion.into(),
    }
}

/// Check value ranges the backends cannot cope with.
pub fn validate_config(config: &RenderConfig) -> Result<()> {
    if config.output.as_os_str().is_empty() {
        return Err(invalid("output", "must not be empty", format!("Use {DEFAULT_OUTPUT}")));
    }
    let is_svg = config
        .output
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(invalid(
            "output",
            format!("{} is not an .svg file", config.output.display()),
            "The chart is written as SVG; use a .svg file name",
        ));
    }
    if config.width < 320 {
        return Err(invalid("width", "must be at least 320", "Use the default of 1800"));
    }
    if config.height < 240 {
        return Err(invalid("height", "must be at least 240", "Use the default of 1125"));
    }
    if config.preview_width < 20 {
        return Err(invalid("preview_width", "must be at least 20", "Use the default of 80"));
    }
    if config.preview_height < 4 {
        return Err(invalid("preview_height", "must be at least 4", "Use the default of 24"));
    }
    Ok(())
}
