//! Storage declaration validation.
//!
//! See [`crate::lint::schema::STORAGE_SCHEMA`] for the per-definition key
//! table.

use serde_yaml::Mapping;

use crate::lint::schema::{check_definitions, STORAGE_SCHEMA};
use crate::lint::DiagnosticSink;

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    check_definitions(charm, "storage", "storage", &STORAGE_SCHEMA, sink);
}
