//! Human-readable output formatter.
//!
//! One `<letter>: <message>` line per diagnostic, in emission order,
//! followed by a summary when anything actionable was found. The output
//! is plain text; per-channel styling is the terminal UI's job.

use std::io::Write;

use super::LintFormatter;
use crate::lint::{Diagnostic, Severity};

/// Formats proof output for terminal display.
#[derive(Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[Diagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            writeln!(writer, "{diag}")?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
