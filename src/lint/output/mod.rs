//! Proof output formatters.
//!
//! This module provides formatters for writing proof diagnostics in
//! different formats (human-readable, JSON).

pub mod human;
pub mod json;

use std::io::Write;

use crate::lint::Diagnostic;

/// Trait for formatting proof output.
pub trait LintFormatter {
    /// Format diagnostics to the given writer.
    fn format<W: Write>(&self, diagnostics: &[Diagnostic], writer: &mut W)
        -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
