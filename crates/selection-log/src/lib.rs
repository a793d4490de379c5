//! Feature-Selection Log Reader
//!
//! Pulls the selected feature names out of the `# Selected features`
//! section of a feature-selection run log.

mod error;
mod parser;

pub use error::LogError;
pub use parser::{parse_selected_features, read_selected_features, LogMarkers};
