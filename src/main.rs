//! kvchart CLI
//!
//! Renders the edge-device KV cache memory chart.
//!
//! # Usage
//!
//! ```bash
//! # Write kv_cache_edge_device.svg to the current directory
//! kvchart
//!
//! # Write elsewhere, no terminal preview
//! kvchart --output docs/kv.svg --no-preview
//!
//! # Print the numbers behind the chart
//! kvchart table --format json
//! ```

use clap::Parser;
use kvchart::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
