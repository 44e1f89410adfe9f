//! README assembly
//!
//! The assembler walks the fixed target table, pipes each raw timing file
//! through the table formatter, and substitutes the captured tables into
//! the embedded README template. The finished document is returned as a
//! single string; callers write it out only after the whole render has
//! succeeded, so a failed run never produces a partial document.

mod readme;

pub use readme::README_TEMPLATE;

use crate::error::{Error, Result};
use crate::formatter::TableFormatter;
use crate::targets::{Target, TARGETS};
use crate::template::Template;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Sentinel substituted for targets whose results are not available.
pub const UNAVAILABLE: &str = "TBD";

/// Assembles the README from per-target timing files.
///
/// The formatter is a capability parameter so tests can substitute a stub
/// instead of spawning the real program.
pub struct ReportAssembler<F> {
    formatter: F,
    results_dir: PathBuf,
    allow_missing: bool,
}

impl<F: TableFormatter> ReportAssembler<F> {
    /// Create an assembler reading timing files from `results_dir`.
    pub fn new(formatter: F, results_dir: impl Into<PathBuf>) -> Self {
        Self {
            formatter,
            results_dir: results_dir.into(),
            allow_missing: false,
        }
    }

    /// Treat every target as optional: absent files become TBD sections.
    pub fn allow_missing(mut self, allow: bool) -> Self {
        self.allow_missing = allow;
        self
    }

    /// Assemble the README from the built-in template and target table.
    pub fn assemble(&self) -> Result<String> {
        self.assemble_with(&Template::parse(README_TEMPLATE), TARGETS)
    }

    /// Assemble an arbitrary template from an arbitrary target list.
    ///
    /// Each target is resolved to a rendered table (or the TBD sentinel)
    /// before the template is rendered in a single pass, so either the
    /// whole document is produced or nothing is.
    pub fn assemble_with(&self, template: &Template, targets: &[Target]) -> Result<String> {
        let mut blocks = HashMap::new();
        for target in targets {
            let table = self.render_target(target)?;
            blocks.insert(target.placeholder.to_string(), table);
        }
        template.render(&blocks)
    }

    fn render_target(&self, target: &Target) -> Result<String> {
        let path = self.results_dir.join(target.file_name);
        if !path.exists() {
            if target.optional || self.allow_missing {
                tracing::warn!(
                    "no results for target '{}' ({}), marking section {}",
                    target.name,
                    path.display(),
                    UNAVAILABLE
                );
                return Ok(UNAVAILABLE.to_string());
            }
            return Err(Error::MissingInputFile {
                target: target.name.to_string(),
                path,
            });
        }

        let raw = fs::read_to_string(&path)?;
        let table = self.formatter.render(target.name, &raw)?;
        tracing::info!(
            "rendered table for target '{}' ({} bytes)",
            target.name,
            table.len()
        );
        Ok(table)
    }
}
