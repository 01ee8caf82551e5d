//! Stateless per-facet metadata checkers.
//!
//! Each module validates one facet of a parsed `metadata.yaml` mapping
//! (actions are the exception and take their own document). Checkers hold
//! no state and report exclusively through a
//! [`DiagnosticSink`](crate::lint::DiagnosticSink); the fixed running
//! order lives in [`crate::lint::proof`].

pub mod actions;
pub mod categories;
pub mod display_name;
pub mod extra_bindings;
pub mod maintainer;
pub mod min_juju_version;
pub mod payloads;
pub mod resources;
pub mod series;
pub mod storage;
pub mod terms;
