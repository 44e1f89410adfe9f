//! Table formatting via an external program
//!
//! The raw timing files are turned into ASCII tables by a standalone
//! formatter (raw text on stdin, finished table on stdout). The trait keeps
//! that invocation behind a seam so the assembler can be tested without
//! shelling out.

use crate::error::{Error, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Capability for rendering one target's raw measurements into a table.
pub trait TableFormatter {
    /// Render `raw` into a finished table. `target` names the result set
    /// being rendered and only appears in diagnostics.
    fn render(&self, target: &str, raw: &str) -> Result<String>;
}

/// Invokes the external formatter program once per call.
///
/// Each invocation is independent and stateless: the program is spawned,
/// fed the raw text on stdin, and its stdout is captured in full. A launch
/// failure, a non-zero exit status, or non-UTF-8 output is fatal for the
/// target being rendered.
pub struct ExternalFormatter {
    program: PathBuf,
    args: Vec<String>,
}

impl ExternalFormatter {
    /// Create a formatter that runs the given program.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments passed to the program on every invocation.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn tool_error(&self, target: &str, detail: String) -> Error {
        Error::ExternalTool {
            target: target.to_string(),
            program: self.program.display().to_string(),
            detail,
        }
    }
}

impl TableFormatter for ExternalFormatter {
    fn render(&self, target: &str, raw: &str) -> Result<String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.tool_error(target, format!("failed to launch: {}", e)))?;

        // stdin was requested as piped, so take() always succeeds here
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.tool_error(target, "stdin unavailable".to_string()))?;
        if let Err(e) = stdin.write_all(raw.as_bytes()) {
            // A formatter that exits without draining stdin reports
            // through its exit status, not through the broken pipe.
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(self.tool_error(target, format!("failed to write input: {}", e)));
            }
        }
        drop(stdin);

        let output = child
            .wait_with_output()
            .map_err(|e| self.tool_error(target, format!("failed to collect output: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("exited with {}", output.status)
            } else {
                format!("exited with {}: {}", output.status, stderr.trim())
            };
            return Err(self.tool_error(target, detail));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| self.tool_error(target, "produced non-UTF-8 output".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_captures_stdout_in_full() {
        let formatter = ExternalFormatter::new("tr").args(["a-z", "A-Z"]);
        let table = formatter.render("nano", "1,2,3\nabc\n").unwrap();
        assert_eq!(table, "1,2,3\nABC\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_passes_input_through_unmodified() {
        let formatter = ExternalFormatter::new("cat");
        let table = formatter.render("nano", "1,2,3").unwrap();
        assert_eq!(table, "1,2,3");
    }

    #[test]
    #[cfg(unix)]
    fn test_empty_input_yields_empty_output() {
        let formatter = ExternalFormatter::new("cat");
        let table = formatter.render("nano", "").unwrap();
        assert_eq!(table, "");
    }

    #[test]
    #[cfg(unix)]
    fn test_nonzero_exit_is_fatal() {
        let formatter = ExternalFormatter::new("false");
        let err = formatter.render("stm32", "1,2,3").unwrap_err();
        match err {
            Error::ExternalTool { target, detail, .. } => {
                assert_eq!(target, "stm32");
                assert!(detail.contains("exited with"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_program_is_fatal() {
        let formatter = ExternalFormatter::new("/nonexistent/generate_table.awk");
        let err = formatter.render("esp32", "1,2,3").unwrap_err();
        match err {
            Error::ExternalTool { target, detail, .. } => {
                assert_eq!(target, "esp32");
                assert!(detail.contains("failed to launch"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
