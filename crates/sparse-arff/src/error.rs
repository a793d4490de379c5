//! Dataset Reader Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading a sparse dataset
#[derive(Debug, Error)]
pub enum ArffError {
    /// Underlying file could not be opened or read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data pair did not split into exactly two tokens
    #[error("line {line}: expected `<index> <value>`, got {pair:?}")]
    MalformedPair { line: usize, pair: String },

    /// Token is not a valid integer
    #[error("line {line}: invalid integer {token:?}")]
    InvalidInteger { line: usize, token: String },
}

impl ArffError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ArffError::Io {
            path: path.into(),
            source,
        }
    }
}
