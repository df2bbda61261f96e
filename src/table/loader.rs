//! CSV table loading

use csv::ReaderBuilder;
use std::path::Path;

use super::quoting::validate_quoting;
use crate::error::{LoadError, ParseError};
use crate::utils::files::read_all;

/// Rows in file order, cells in column order.
pub type TableRows = Vec<Vec<String>>;

/// Eager CSV loader.
///
/// No header row is assumed and blank lines are skipped. Defaults to a comma
/// delimiter and ragged rows allowed.
#[derive(Debug, Clone)]
pub struct TableLoader {
    delimiter: u8,
    flexible: bool,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self { delimiter: b',', flexible: true }
    }
}

impl TableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// When `false`, every record must have as many fields as the first one.
    pub fn flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Read and parse the whole file at `path`.
    ///
    /// Any malformed record anywhere in the file fails the load; no rows are
    /// returned in that case.
    pub fn load(&self, path: &Path) -> Result<TableRows, LoadError> {
        let bytes = read_all(path)?;
        self.parse(&bytes)
            .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })
    }

    fn parse(&self, bytes: &[u8]) -> Result<TableRows, ParseError> {
        validate_quoting(bytes, self.delimiter)?;

        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .delimiter(self.delimiter)
            .flexible(self.flexible)
            .from_reader(bytes);

        // Input is already in memory, so every reader error is a format error.
        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        tracing::debug!(rows = rows.len(), "parsed csv records");
        Ok(rows)
    }
}

/// Load a comma-separated file with default settings.
pub fn load_table(path: &Path) -> Result<TableRows, LoadError> {
    TableLoader::new().load(path)
}
