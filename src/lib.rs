//! sortbench-report - benchmark README generation
//!
//! Rebuilds the AutoBenchmark README from pre-collected per-board timing
//! files. Each file is piped through an external table-formatting program
//! and the captured ASCII tables are spliced into a fixed Markdown
//! template.
//!
//! # Architecture
//!
//! - **Targets**: the closed set of supported boards and their input files
//! - **Formatter**: the external table program, behind a trait seam
//! - **Template**: literal segments plus named placeholders, parsed once
//! - **Report**: the enumerate, format, substitute pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use sortbench_report::formatter::ExternalFormatter;
//! use sortbench_report::report::ReportAssembler;
//!
//! fn main() -> anyhow::Result<()> {
//!     let formatter = ExternalFormatter::new("./generate_table.awk");
//!     let document = ReportAssembler::new(formatter, ".").assemble()?;
//!     print!("{}", document);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod formatter;
pub mod report;
pub mod targets;
pub mod template;

// Re-export commonly used types
pub use error::{Error, Result};
pub use formatter::{ExternalFormatter, TableFormatter};
pub use report::ReportAssembler;
pub use targets::{Target, TARGETS};
pub use template::Template;
