//! Mock sink implementation for testing.
//!
//! `MockSink` implements the [`DiagnosticSink`] trait and records every
//! emit call with its raw (unformatted) message, so tests can assert on
//! call counts and exact arguments per severity.
//!
//! # Example
//!
//! ```
//! use charmlint::lint::{DiagnosticSink, MockSink, Severity};
//!
//! let mut sink = MockSink::new();
//! sink.warn("Maintainers field must be a list");
//!
//! assert_eq!(sink.count(Severity::Warning), 1);
//! assert!(sink.has_warning("must be a list"));
//! ```

use super::sink::{DiagnosticSink, Severity};

/// Test spy sink that records raw emit calls for assertions.
#[derive(Debug, Default)]
pub struct MockSink {
    calls: Vec<(Severity, String)>,
}

impl MockSink {
    /// Create a new empty mock sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every emit call in order, with the raw message.
    pub fn calls(&self) -> &[(Severity, String)] {
        &self.calls
    }

    /// Raw info messages, in emission order.
    pub fn infos(&self) -> Vec<&str> {
        self.by_severity(Severity::Info)
    }

    /// Raw warning messages, in emission order.
    pub fn warnings(&self) -> Vec<&str> {
        self.by_severity(Severity::Warning)
    }

    /// Raw error messages, in emission order.
    pub fn errors(&self) -> Vec<&str> {
        self.by_severity(Severity::Error)
    }

    /// Number of emit calls at the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.calls.iter().filter(|(s, _)| *s == severity).count()
    }

    /// Check if an info message containing the fragment was reported.
    pub fn has_info(&self, fragment: &str) -> bool {
        self.infos().iter().any(|m| m.contains(fragment))
    }

    /// Check if a warning containing the fragment was reported.
    pub fn has_warning(&self, fragment: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(fragment))
    }

    /// Check if an error containing the fragment was reported.
    pub fn has_error(&self, fragment: &str) -> bool {
        self.errors().iter().any(|m| m.contains(fragment))
    }

    /// Whether nothing was reported at all.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// Clear all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn by_severity(&self, severity: Severity) -> Vec<&str> {
        self.calls
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }
}

impl DiagnosticSink for MockSink {
    fn info(&mut self, msg: &str) {
        self.calls.push((Severity::Info, msg.to_string()));
    }

    fn warn(&mut self, msg: &str) {
        self.calls.push((Severity::Warning, msg.to_string()));
    }

    fn err(&mut self, msg: &str) {
        self.calls.push((Severity::Error, msg.to_string()));
    }
}
