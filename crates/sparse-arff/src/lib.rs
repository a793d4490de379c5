//! Sparse Dataset Reader
//!
//! Reads the attribute header of an ARFF-like dataset and streams its
//! sparse `{index value, ...}` rows with the class label split out.

mod error;
mod header;
mod reader;
mod row;

pub use error::ArffError;
pub use header::{ArffOptions, Header};
pub use reader::{ArffReader, Rows};
pub use row::{parse_row, SparseRow};
