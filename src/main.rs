//! CLI entry point for the abstract analyzer.

use std::io;
use std::path::PathBuf;

use abstract_analyzer::AbstractAnalyzer;
use anyhow::Result;
use tracing::debug;

/// Discipline keyword table, read from the working directory.
const TABLE_PATH: &str = "Abstract_keywords.csv";

fn main() -> Result<()> {
    // Default to warn so log lines do not interleave with the prompts.
    // RUST_LOG overrides for debugging.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!("abstract analyzer starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut analyzer = AbstractAnalyzer::new(stdin, stdout, PathBuf::from(TABLE_PATH))?;
    analyzer.run()
}
