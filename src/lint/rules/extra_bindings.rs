//! Extra bindings validation.
//!
//! `extra-bindings` maps binding names to null placeholders; only the
//! mapping shape is enforced.

use serde_yaml::Mapping;

use crate::lint::DiagnosticSink;

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    if let Some(bindings) = charm.get("extra-bindings") {
        if !bindings.is_mapping() {
            sink.err("extra-bindings: must be a dictionary");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::MockSink;

    fn charm(text: &str) -> Mapping {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn absent_bindings_pass() {
        let mut sink = MockSink::new();
        check(&charm("name: foo"), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn mapping_with_null_values_passes() {
        let mut sink = MockSink::new();
        check(&charm("extra-bindings:\n  public:"), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn list_bindings_are_an_error() {
        let mut sink = MockSink::new();
        check(&charm("extra-bindings: [public]"), &mut sink);
        assert_eq!(sink.errors(), vec!["extra-bindings: must be a dictionary"]);
    }
}
