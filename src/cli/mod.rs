//! Command-line entry points for `load-config` and `load-table`
//!
//! Each program loads one file, prints it, and returns any failure to `main`,
//! which exits non-zero with the error description.

use anyhow::Result;
use std::io::Write;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod load_config;
pub mod load_table;

/// Install the stderr tracing subscriber.
///
/// RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn write_stdout(rendered: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
