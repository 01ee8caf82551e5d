//! Display name validation.
//!
//! The `display-name` field is optional but advertised: store frontends use
//! it for custom naming, so its absence is worth an advisory.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use crate::lint::DiagnosticSink;

static DISPLAY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+[A-Za-z0-9 -]*$").expect("display-name pattern must compile")
});

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    let Some(value) = charm.get("display-name") else {
        sink.info("`display-name` not provided, add for custom naming in the UI");
        return;
    };
    let Value::String(name) = value else {
        sink.err("display-name: must be a string");
        return;
    };
    if !DISPLAY_NAME.is_match(name) {
        sink.err(
            "display-name: not in valid format. \
             Only letters, numbers, dashes, and hyphens are permitted.",
        );
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
    fn absent_field_gets_an_advisory() {
        let mut sink = MockSink::new();
        check(&charm("name: peanut-butter"), &mut sink);
        assert_eq!(
            sink.infos(),
            vec!["`display-name` not provided, add for custom naming in the UI"]
        );
    }

    #[test]
    fn words_with_spaces_pass() {
        let mut sink = MockSink::new();
        check(&charm("display-name: Peanut Butter"), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn punctuation_is_rejected() {
        let mut sink = MockSink::new();
        check(&charm("display-name: <Peanut$!Butter>"), &mut sink);
        assert_eq!(
            sink.errors(),
            vec![
                "display-name: not in valid format. \
                 Only letters, numbers, dashes, and hyphens are permitted."
            ]
        );
    }

    #[test]
    fn non_string_value_is_an_error() {
        let mut sink = MockSink::new();
        check(&charm("display-name: [nope]"), &mut sink);
        assert_eq!(sink.errors(), vec!["display-name: must be a string"]);
    }
}
