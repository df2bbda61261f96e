//! Whole-file reads that keep the open and read stages apart.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::LoadError;

/// Read the entire file at `path` into memory.
///
/// Failing to open maps to [`LoadError::FileOpen`], failing afterwards maps to
/// [`LoadError::Read`]. The handle is dropped before returning on every path.
pub fn read_all(path: &Path) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open(path)
        .map_err(|source| LoadError::FileOpen { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), "opened file");

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read file");

    Ok(bytes)
}
