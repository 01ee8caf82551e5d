//! Proof command implementation.
//!
//! The `charmlint proof` command runs every check over a charm directory
//! and reports the findings.

use std::path::{Path, PathBuf};

use crate::charm::Charm;
use crate::cli::args::ProofArgs;
use crate::error::Result;
use crate::lint::{Diagnostic, HumanFormatter, JsonFormatter, LintFormatter, Linter};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The proof command implementation.
pub struct ProofCommand {
    working_dir: PathBuf,
    args: ProofArgs,
}

impl ProofCommand {
    /// Create a new proof command.
    pub fn new(working_dir: &Path, args: ProofArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Get the working directory path.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ProofArgs {
        &self.args
    }

    /// Format diagnostics using the appropriate formatter.
    fn format_output(&self, diagnostics: &[Diagnostic]) -> String {
        let mut output = Vec::new();

        match self.args.format.as_str() {
            "json" => {
                let formatter = JsonFormatter::new();
                formatter.format(diagnostics, &mut output).ok();
            }
            _ => {
                let formatter = HumanFormatter::new();
                formatter.format(diagnostics, &mut output).ok();
            }
        }

        String::from_utf8(output).unwrap_or_default()
    }
}

impl Command for ProofCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Resolve the charm directory relative to where we were invoked
        let charm = match Charm::at(self.working_dir.join(&self.args.charm)) {
            Ok(charm) => charm,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let mut linter = Linter::new();
        charm.proof(&mut linter);
        let diagnostics = linter.diagnostics();

        // Check for errors based on strict mode
        let should_fail = linter.has_errors() || (self.args.strict && linter.has_warnings());

        if diagnostics.is_empty() {
            if self.args.format == "human" {
                ui.success("Charm is valid!");
            } else {
                // For JSON, still output the formatted result (empty diagnostics)
                let output = self.format_output(diagnostics);
                ui.message(&output);
            }
            return Ok(CommandResult::success());
        }

        // Output diagnostics in the requested format
        let output = self.format_output(diagnostics);

        // Human lines are plain text starting with the severity letter, so
        // the prefix decides the channel and the UI applies any styling.
        if self.args.format == "human" {
            for line in output.lines() {
                if line.starts_with("E: ") {
                    ui.error(line);
                } else if line.starts_with("W: ") {
                    ui.warning(line);
                } else {
                    ui.message(line);
                }
            }
        } else {
            // For JSON, output as-is
            ui.message(&output);
        }

        if should_fail {
            Ok(CommandResult::failure(1))
        } else {
            Ok(CommandResult::success())
        }
    }
}
