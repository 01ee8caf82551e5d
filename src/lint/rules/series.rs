//! Series list validation.

use serde_yaml::Mapping;

use crate::lint::DiagnosticSink;

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    if let Some(series) = charm.get("series") {
        if !series.is_sequence() {
            sink.err("series: must be a list of series names");
        }
    }
}
