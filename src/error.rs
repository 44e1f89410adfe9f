//! Error types for the report assembler

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report run
#[derive(Error, Debug)]
pub enum Error {
    /// A required raw timing file is absent
    #[error("missing input file for target '{}': {}", target, path.display())]
    MissingInputFile {
        /// Target whose timing file was expected
        target: String,
        /// Path that was looked up
        path: PathBuf,
    },

    /// The external table formatter could not be run for one target
    #[error("table formatter '{}' failed for target '{}': {}", program, target, detail)]
    ExternalTool {
        /// Target whose table was being rendered
        target: String,
        /// Formatter program that was invoked
        program: String,
        /// What went wrong (launch failure, exit status, bad output)
        detail: String,
    },

    /// Template error
    #[error("template error: {0}")]
    Template(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
