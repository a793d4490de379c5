//! Statistics Error Types

use sparse_arff::ArffError;
use thiserror::Error;

/// Errors while computing statistics
#[derive(Debug, Error)]
pub enum StatsError {
    /// Selected feature is not declared in the dataset header
    #[error("Selected feature {0:?} is not an attribute of the dataset")]
    UnknownFeature(String),

    /// Row stream failed
    #[error(transparent)]
    Dataset(#[from] ArffError),
}
