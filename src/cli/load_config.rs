//! `load-config` implementation

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use super::{init_logging, write_stdout};
use crate::config::load_config;
use crate::render::{render_config, OutputFormat};

/// Load a JSON configuration file and print the decoded record
#[derive(Parser)]
#[command(name = "load-config")]
#[command(author, version, about, long_about = None)]
pub struct LoadConfigArgs {
    /// Configuration file to load
    #[arg(value_name = "PATH", env = "LOADKIT_CONFIG", default_value = "config.json")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Print the api key instead of masking it
    #[arg(long)]
    pub show_secrets: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn main() -> Result<()> {
    let args = LoadConfigArgs::parse();
    init_logging(args.verbose);
    run(args)
}

pub fn run(args: LoadConfigArgs) -> Result<()> {
    tracing::debug!(path = %args.path.display(), "loading config");
    let record = load_config(&args.path)?;
    let shown = if args.show_secrets { record } else { record.redacted() };
    write_stdout(&render_config(&shown, args.format)?)
}
