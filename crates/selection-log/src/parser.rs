//! Selected Features Section Parser

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Section markers of the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMarkers {
    /// Line prefix opening the selected features section
    pub begin: String,
    /// Line prefix closing the section
    pub end: String,
    /// Prefix of comment lines skipped inside the section
    pub comment: String,
}

impl Default for LogMarkers {
    fn default() -> Self {
        Self {
            begin: "# Selected features".to_string(),
            end: "# Statistics".to_string(),
            comment: "#".to_string(),
        }
    }
}

/// Read the selected feature names from a log file
pub fn read_selected_features(
    path: impl AsRef<Path>,
    markers: &LogMarkers,
) -> Result<Vec<String>, LogError> {
    let path = path.as_ref();
    let io_err = |source| LogError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let features = parse_selected_features(BufReader::new(file), markers).map_err(io_err)?;

    debug!(
        "Read {} selected features from {}",
        features.len(),
        path.display()
    );
    Ok(features)
}

/// Collect the feature tokens of the selected features section.
///
/// Tokens keep file order and duplicates. Without an end marker the
/// section runs to end of input; without a begin marker nothing is collected.
pub fn parse_selected_features<R: BufRead>(
    reader: R,
    markers: &LogMarkers,
) -> std::io::Result<Vec<String>> {
    let mut features = Vec::new();
    let mut collecting = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if !collecting {
            collecting = line.starts_with(&markers.begin);
            continue;
        }
        if line.starts_with(&markers.end) {
            break;
        }
        if line.is_empty() || line.starts_with(&markers.comment) {
            continue;
        }

        features.extend(line.split_whitespace().map(str::to_string));
    }

    Ok(features)
}
