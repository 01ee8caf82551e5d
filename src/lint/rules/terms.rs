//! Terms list validation.

use serde_yaml::Mapping;

use crate::lint::DiagnosticSink;

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    if let Some(terms) = charm.get("terms") {
        if !terms.is_sequence() {
            sink.err("terms: must be a list of term ids");
        }
    }
}
