//! Feature Selection Statistics - Main Entry Point

use clap::Parser;
use fs_stats::{init_logging, run, Args};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    info!("=== compute-stats v{} ===", env!("CARGO_PKG_VERSION"));

    let report = run(&args)?;
    print!("{report}");

    Ok(())
}
