//! Feature Selection Statistics
//!
//! Wires the dataset reader, the selection log reader and the statistics
//! engine into the `compute-stats` command.

use anyhow::{Context, Result};
use clap::Parser;
use info_stats::{ReportFormat, Selection, Statistics, StatisticsEngine};
use selection_log::{read_selected_features, LogMarkers};
use sparse_arff::{ArffOptions, ArffReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Compute BornFS statistics from an ARFF file and a feature selection log
#[derive(Debug, Parser)]
#[command(name = "compute-stats", version)]
pub struct Args {
    /// Input ARFF file
    pub arff: PathBuf,

    /// BornFS log file with selected features
    pub log: PathBuf,
}

/// Initialize logging on stderr; stdout carries the report
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Read both inputs and derive the statistics in a single pass over the rows
pub fn compute_statistics(arff: &Path, log: &Path) -> Result<Statistics> {
    let reader = ArffReader::open(arff, &ArffOptions::default())
        .with_context(|| format!("failed to read dataset header from {}", arff.display()))?;
    let header = reader.header().clone();
    debug!("Dataset attributes: {:?}", header.names());

    let names = read_selected_features(log, &LogMarkers::default())
        .with_context(|| format!("failed to read selected features from {}", log.display()))?;
    let selection = Selection::resolve(&header, &names).with_context(|| {
        format!("selected features in {} do not match the dataset", log.display())
    })?;

    info!(
        "Selected {} of {} attributes",
        selection.len(),
        header.len()
    );

    let mut engine = StatisticsEngine::new(header.len(), selection);
    engine
        .accumulate(reader.rows())
        .with_context(|| format!("failed to read data rows from {}", arff.display()))?;

    Ok(engine.finish())
}

/// Run the command and return the rendered report
pub fn run(args: &Args) -> Result<String> {
    let stats = compute_statistics(&args.arff, &args.log)?;
    Ok(stats.render(&ReportFormat::default()))
}
