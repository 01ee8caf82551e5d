//! Severity-tagged diagnostics and the sink checkers report through.
//!
//! Every checker communicates findings exclusively by calling one of the
//! three emit methods on [`DiagnosticSink`]; checkers never return errors
//! and never panic on malformed input. [`Linter`] is the production sink
//! that accumulates [`Diagnostic`] records in emission order.

use std::fmt;

/// Severity of a reported finding, in ascending importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Advisory notice, does not affect validity.
    Info,
    /// Deviation from best practice, non-blocking.
    Warning,
    /// Structural or semantic violation, blocking.
    Error,
}

impl Severity {
    /// Single-letter prefix used when formatting a diagnostic.
    pub fn letter(&self) -> &'static str {
        match self {
            Severity::Info => "I",
            Severity::Warning => "W",
            Severity::Error => "E",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single finding produced during a proof run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of this diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.letter(), self.message)
    }
}

/// Receives findings from checkers.
///
/// Emissions preserve call order. No operation can fail; the only side
/// effect is the append.
pub trait DiagnosticSink {
    /// Report an advisory notice.
    fn info(&mut self, msg: &str);

    /// Report a best-practice deviation.
    fn warn(&mut self, msg: &str);

    /// Report a violation.
    fn err(&mut self, msg: &str);
}

/// Production sink: collects diagnostics in the order they are reported.
#[derive(Debug, Default)]
pub struct Linter {
    diagnostics: Vec<Diagnostic>,
}

impl Linter {
    /// Create an empty linter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected diagnostics, in emission order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Formatted messages (`"E: ..."`, `"W: ..."`, `"I: ..."`), in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }

    /// Whether any error-severity diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Whether any warning-severity diagnostic was reported.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// The highest severity reported so far, if anything was reported.
    pub fn max_severity(&self) -> Option<Severity> {
        self.diagnostics.iter().map(|d| d.severity).max()
    }
}

impl DiagnosticSink for Linter {
    fn info(&mut self, msg: &str) {
        self.diagnostics.push(Diagnostic::new(Severity::Info, msg));
    }

    fn warn(&mut self, msg: &str) {
        self.diagnostics
            .push(Diagnostic::new(Severity::Warning, msg));
    }

    fn err(&mut self, msg: &str) {
        self.diagnostics.push(Diagnostic::new(Severity::Error, msg));
    }
}
