//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal output
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use charmlint::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.warning("W: Metadata missing required field \"tags\"");
//! ui.success("Charm is valid!");
//!
//! assert!(ui.has_warning("missing required field"));
//! assert!(ui.has_success("valid"));
//! ```

pub mod mock;
pub mod terminal;

pub use mock::MockUI;
pub use terminal::{should_use_colors, TerminalUI};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
