//! sortbench-report CLI
//!
//! Command-line entry point for regenerating the benchmark README.

use anyhow::Result;
use clap::Parser;
use sortbench_report::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the document can be redirected from stdout.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    cli.run()?;

    Ok(())
}
