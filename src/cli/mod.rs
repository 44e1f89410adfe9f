//! CLI argument parsing and command handling

use crate::formatter::ExternalFormatter;
use crate::report::ReportAssembler;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Regenerate the benchmark README from per-board timing files
#[derive(Parser, Debug)]
#[command(name = "sortbench-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory containing the per-target *.txt timing files
    #[arg(short, long, default_value = ".")]
    pub results_dir: PathBuf,

    /// Table formatter program (raw text on stdin, table on stdout)
    #[arg(short, long, default_value = "./generate_table.awk")]
    pub formatter: PathBuf,

    /// Write the document here instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Mark any target with a missing timing file as TBD instead of failing
    #[arg(long)]
    pub allow_missing: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Run the whole enumerate, format, substitute pipeline
    pub fn run(&self) -> Result<()> {
        tracing::info!("results dir: {}", self.results_dir.display());
        tracing::info!("formatter: {}", self.formatter.display());

        let formatter = ExternalFormatter::new(&self.formatter);
        let assembler =
            ReportAssembler::new(formatter, &self.results_dir).allow_missing(self.allow_missing);

        let document = assembler
            .assemble()
            .context("failed to assemble the README document")?;

        // The document only reaches its destination once fully rendered, so
        // a failed run never leaves a partial file behind.
        match &self.output {
            Some(path) => {
                fs::write(path, &document)
                    .with_context(|| format!("failed to write document to: {}", path.display()))?;
                tracing::info!("wrote {} bytes to {}", document.len(), path.display());
            }
            None => {
                std::io::stdout()
                    .write_all(document.as_bytes())
                    .context("failed to write document to stdout")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_invocation() {
        let cli = Cli::parse_from(["sortbench-report"]);
        assert_eq!(cli.results_dir, PathBuf::from("."));
        assert_eq!(cli.formatter, PathBuf::from("./generate_table.awk"));
        assert!(cli.output.is_none());
        assert!(!cli.allow_missing);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from([
            "sortbench-report",
            "--results-dir",
            "results",
            "--formatter",
            "/usr/local/bin/tablegen",
            "--output",
            "README.md",
            "--allow-missing",
        ]);
        assert_eq!(cli.results_dir, PathBuf::from("results"));
        assert_eq!(cli.formatter, PathBuf::from("/usr/local/bin/tablegen"));
        assert_eq!(cli.output, Some(PathBuf::from("README.md")));
        assert!(cli.allow_missing);
    }
}
