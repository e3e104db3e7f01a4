//! Error types with actionable diagnostics.
//!
//! Every message names the failing input and ends with a hint on how to fix it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for kvchart operations.
pub type Result<T> = std::result::Result<T, KvChartError>;

/// Errors that can occur while rendering or reporting the chart.
#[derive(Error, Debug)]
pub enum KvChartError {
    /// Render settings file not found.
    #[error("Configuration file not found: {path}\n  → Create the file or drop --config to use the defaults")]
    ConfigNotFound { path: PathBuf },

    /// Render settings file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// Render setting has an invalid value.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The drawing backend failed.
    #[error("Failed to render chart to {path}: {message}\n  → Check that the output directory exists and is writable")]
    Render { path: PathBuf, message: String },

    /// The terminal preview could not be drawn.
    #[error("Terminal preview failed: {message}\n  → Pass --no-preview to skip it")]
    Preview { message: String },

    /// Serialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl KvChartError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Create a render error for `path` from any backend error.
    pub fn render(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Render { path: path.into(), message: err.to_string() }
    }

    /// Error code shown in front of CLI diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::ConfigValue { .. } => "E003",
            Self::Render { .. } => "E020",
            Self::Preview { .. } => "E021",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
