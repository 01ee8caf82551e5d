//! Terminal UI implementation.

use std::io::Write;

use console::{Style, Term};

use super::UserInterface;

/// Whether styled output should be used.
pub fn should_use_colors() -> bool {
    // Honor the NO_COLOR convention (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    Term::stdout().is_term()
}

/// Styles for the three message kinds.
struct Palette {
    success: Style,
    warning: Style,
    error: Style,
}

impl Palette {
    fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
        }
    }
}

/// Terminal UI implementation.
///
/// Regular output and findings go to stdout; errors go to stderr so
/// reports stay usable in pipelines.
pub struct TerminalUI {
    stdout: Term,
    stderr: Term,
    palette: Palette,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new() -> Self {
        let palette = if should_use_colors() {
            Palette::new()
        } else {
            Palette::plain()
        };

        Self {
            stdout: Term::stdout(),
            stderr: Term::stderr(),
            palette,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", self.palette.success.apply_to(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.stdout, "{}", self.palette.warning.apply_to(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.stderr, "{}", self.palette.error.apply_to(msg)).ok();
    }
}
