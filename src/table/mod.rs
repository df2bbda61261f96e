//! Tabular data loading
//!
//! Reads comma-separated text into rows of string cells, rejecting the whole
//! file when any record is malformed.

pub mod loader;
pub mod quoting;

pub use loader::{load_table, TableLoader, TableRows};
