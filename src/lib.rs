//! loadkit: typed loaders for JSON configuration files and CSV tables
//!
//! Both loaders read the whole file, parse it eagerly and hand any failure
//! back as a [`LoadError`]. Deciding whether to abort is left to the caller.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod table;
pub mod utils;

pub use config::{load_config, save_config, ConfigRecord};
pub use error::{LoadError, ParseError};
pub use table::{load_table, TableLoader, TableRows};
