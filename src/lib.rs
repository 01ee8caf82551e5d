//! Charmlint - Static analysis for charm metadata.
//!
//! Charmlint examines an unpacked charm's `metadata.yaml`, `config.yaml`
//! and `actions.yaml` and reports severity-tagged findings, the way a
//! reviewer would before the charm is published.
//!
//! # Modules
//!
//! - [`charm`] - Charm directory handle and proof orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Checkers, schemas, and diagnostic plumbing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use charmlint::lint::{proof_metadata, Linter};
//! use serde_yaml::Mapping;
//!
//! let metadata: Mapping = serde_yaml::from_str(
//!     r#"
//! name: sample
//! display-name: Sample
//! summary: A sample charm
//! maintainer: Tester <tester@example.com>
//! tags: [misc]
//! "#,
//! )
//! .unwrap();
//!
//! let mut linter = Linter::new();
//! proof_metadata(&metadata, &mut linter);
//! assert!(linter.diagnostics().is_empty());
//! ```
//!
//! For whole-directory proofs, see [`Charm`].

pub mod charm;
pub mod cli;
pub mod error;
pub mod lint;
pub mod ui;

pub use charm::Charm;
pub use error::{CharmlintError, Result};
