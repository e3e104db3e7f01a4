//! Command-line interface.
//!
//! ```bash
//! kvchart                      # write kv_cache_edge_device.svg and preview it
//! kvchart -o chart.svg --no-preview
//! kvchart --config render.yaml
//! kvchart table --format json
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// KV cache memory chart for edge devices
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "kvchart")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Chart model weights plus KV cache memory against context length")]
pub struct Cli {
    /// Subcommand to execute (renders the chart when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the memory figures behind the chart
    Table(TableArgs),
}

/// Arguments for rendering the chart
#[derive(Args, Debug, Clone, PartialEq, Default)]
pub struct RenderArgs {
    /// Output SVG file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML file with render settings
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the terminal preview
    #[arg(long)]
    pub no_preview: bool,
}

/// Arguments for the table command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct TableArgs {
    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Output format for the table command
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(format!(
                "Unknown output format: {s}. Valid formats: text, json, yaml"
            )),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
