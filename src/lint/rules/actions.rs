//! Action declaration validation.
//!
//! Unlike the other checkers this one takes the parsed `actions.yaml`
//! document rather than the metadata mapping; actions live in their own
//! file. Names starting with `juju-` shadow built-in operations and are
//! rejected.

use serde_yaml::Value;

use crate::lint::{render, DiagnosticSink};

pub fn check(actions: &Value, sink: &mut dyn DiagnosticSink) {
    let Value::Mapping(actions) = actions else {
        sink.err("actions: must be a dictionary of action definitions");
        return;
    };
    for name in actions.keys() {
        let name = render::plain(name);
        if name.starts_with("juju-") {
            sink.err(&format!(
                "actions.{name}: juju- is a reserved prefix for action names"
            ));
        }
    }
}
