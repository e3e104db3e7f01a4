//! CLI command implementations

mod render;
mod table;


use crate::cli::LogLevel;
use crate::config::{Cli, Command};
use crate::error::KvChartError;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        None => render::run_render(&cli.render, log_level),
        Some(Command::Table(args)) => table::run_table(args, log_level),
    }
}

/// Message for the CLI, prefixed with the error code: `[E001] ...`
fn describe(err: KvChartError) -> String {
    format!("[{}] {err}", err.code())
}
