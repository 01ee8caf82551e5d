//! Resource declaration validation.
//!
//! See [`crate::lint::schema::RESOURCE_SCHEMA`] for the per-definition key
//! table.

use serde_yaml::Mapping;

use crate::lint::schema::{check_definitions, RESOURCE_SCHEMA};
use crate::lint::DiagnosticSink;

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    check_definitions(charm, "resources", "resource", &RESOURCE_SCHEMA, sink);
}
