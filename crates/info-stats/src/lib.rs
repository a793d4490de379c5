//! Information Statistics Engine
//!
//! Accumulates pattern frequencies over a stream of sparse rows and derives
//! entropy and mutual information of the full feature set versus a selected
//! subset.

mod engine;
mod error;
mod frequency;
mod pattern;
mod statistics;

pub use engine::StatisticsEngine;
pub use error::StatsError;
pub use frequency::FrequencyTable;
pub use pattern::{Pattern, Selection};
pub use statistics::{ReportFormat, StatValue, Statistics};
