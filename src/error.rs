//! Error taxonomy shared by the config and table loaders.
//!
//! Loaders hand back the underlying I/O or parser error untouched inside the
//! variant that says which stage failed. Nothing here retries or recovers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::table::quoting::QuoteError;

/// Failure of a single load call.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path is missing, unreadable or permission was denied.
    #[error("failed to open {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file opened but reading its contents failed.
    #[error("failed reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The contents do not match the expected format.
    #[error("failed to parse {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    /// Path of the file the failed load was pointed at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileOpen { path, .. } | Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// What the parser rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Quote(#[from] QuoteError),
}
