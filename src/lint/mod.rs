//! Charm metadata validation and linting.
//!
//! This module holds the whole proof machinery: severity-tagged
//! diagnostics, the facet checkers, the key-table schemas they share, and
//! the output formatters.
//!
//! # Overview
//!
//! The proof system consists of:
//!
//! - **Sink** - Checkers report findings through [`DiagnosticSink`];
//!   [`Linter`] is the accumulating production sink
//! - **Rules** - One stateless checker per metadata facet ([`rules`])
//! - **Schemas** - Shared key tables for keyed definition blocks
//!   ([`schema`])
//! - **Documents** - `config.yaml` has its own validator
//!   ([`check_config_file`])
//!
//! # Example
//!
//! ```
//! use charmlint::lint::{proof_metadata, Linter, Severity};
//!
//! let charm = serde_yaml::from_str("maintainer: Tester <tester@example.com>\ntags: [misc]")
//!     .unwrap();
//!
//! let mut linter = Linter::new();
//! proof_metadata(&charm, &mut linter);
//!
//! // Only the display-name advisory fires for this minimal metadata.
//! assert_eq!(linter.max_severity(), Some(Severity::Info));
//! ```

pub mod config_file;
pub mod mock;
pub mod output;
pub mod proof;
pub mod render;
pub mod rules;
pub mod schema;
pub mod sink;

pub use config_file::{check_config_document, check_config_file};
pub use mock::MockSink;
pub use output::{HumanFormatter, JsonFormatter, LintFormatter};
pub use proof::proof_metadata;
pub use sink::{Diagnostic, DiagnosticSink, Linter, Severity};
