//! Table command implementation

use super::describe;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{OutputFormat, TableArgs};
use crate::hardware::EDGE_REFERENCES;
use crate::model::QWEN_4B_FP16;
use crate::report::MemoryTable;

pub fn run_table(args: TableArgs, level: LogLevel) -> Result<(), String> {
    let table = MemoryTable::build(&QWEN_4B_FP16, &EDGE_REFERENCES);

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Verbose, "Memory figures behind the chart:");
            print!("{}", table.to_text());
        }
        OutputFormat::Json => {
            let json = table.to_json().map_err(describe)?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = table.to_yaml().map_err(describe)?;
            print!("{yaml}");
        }
    }

    Ok(())
}
