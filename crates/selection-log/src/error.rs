//! Log Reader Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors while reading a feature-selection log
#[derive(Debug, Error)]
pub enum LogError {
    /// Log file could not be opened or read
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
