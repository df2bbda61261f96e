//! `load-table` implementation

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::{init_logging, write_stdout};
use crate::render::{render_table, OutputFormat};
use crate::table::TableLoader;

/// Load a CSV file and print every row
#[derive(Parser)]
#[command(name = "load-table")]
#[command(author, version, about, long_about = None)]
pub struct LoadTableArgs {
    /// CSV file to load
    #[arg(value_name = "PATH", env = "LOADKIT_TABLE", default_value = "data.csv")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Field delimiter (a single ASCII character)
    #[arg(short, long, value_name = "CHAR", default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Fail when a record has a different number of fields than the first one
    #[arg(long)]
    pub strict_field_count: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn main() -> Result<()> {
    let args = LoadTableArgs::parse();
    init_logging(args.verbose);
    run(args)
}

pub fn run(args: LoadTableArgs) -> Result<()> {
    tracing::debug!(path = %args.path.display(), "loading table");
    let rows = TableLoader::new()
        .delimiter(args.delimiter)
        .flexible(!args.strict_field_count)
        .load(&args.path)?;
    write_stdout(&render_table(&rows, args.format)?)
}

fn parse_delimiter(value: &str) -> Result<u8, String> {
    let bytes = value.as_bytes();
    if bytes.len() != 1 || !bytes[0].is_ascii() {
        return Err(format!("Delimiter must be a single ASCII character, got '{value}'"));
    }
    match bytes[0] {
        b'"' | b'\r' | b'\n' => Err(format!("Delimiter cannot be {value:?}")),
        byte => Ok(byte),
    }
}
