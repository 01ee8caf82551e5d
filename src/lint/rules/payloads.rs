//! Payload declaration validation.
//!
//! See [`crate::lint::schema::PAYLOAD_SCHEMA`] for the per-definition key
//! table.

use serde_yaml::Mapping;

use crate::lint::schema::{check_definitions, PAYLOAD_SCHEMA};
use crate::lint::DiagnosticSink;

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    check_definitions(charm, "payloads", "payload", &PAYLOAD_SCHEMA, sink);
}
