//! Output rendering (plain text, JSON)

pub mod config;
pub mod table;

pub use config::render_config;
pub use table::render_table;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    Text,
    /// Pretty-printed JSON
    Json,
}
