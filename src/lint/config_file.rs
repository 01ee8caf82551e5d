//! config.yaml options-document validation.
//!
//! A charm's `config.yaml` declares the options end users may set. The
//! document is checked in a fixed sequence, stopping at the first defect
//! that makes later checks meaningless:
//!
//! 1. missing file (an info, config.yaml is optional)
//! 2. unparsable text
//! 3. document not a mapping
//! 4. no `options` key
//! 5. extra top-level keys (warned, then ignored)
//! 6. `options` value not a mapping
//!
//! Every surviving option is then validated independently against the
//! known key set and the declared/default type agreement rules.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use super::render;
use super::sink::DiagnosticSink;

const KNOWN_OPTION_KEYS: &[&str] = &["default", "description", "type"];
const KNOWN_OPTION_TYPES: &[&str] = &["string", "int", "float", "boolean"];

/// Check the `config.yaml` under `charm_dir`, if any.
pub fn check_config_file(charm_dir: &Path, sink: &mut dyn DiagnosticSink) {
    let path = charm_dir.join("config.yaml");
    if !path.is_file() {
        sink.info("File config.yaml not found.");
        return;
    }
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(error) => {
            sink.err(&format!("Cannot parse config.yaml: {error}"));
            return;
        }
    };
    let config: Value = match serde_yaml::from_str(&text) {
        Ok(config) => config,
        Err(error) => {
            sink.err(&format!("Cannot parse config.yaml: {error}"));
            return;
        }
    };
    check_config_document(&config, sink);
}

/// Check an already parsed options document.
pub fn check_config_document(config: &Value, sink: &mut dyn DiagnosticSink) {
    let Value::Mapping(config) = config else {
        sink.err("config.yaml not parsed into a dictionary.");
        return;
    };
    let Some(options) = config.get("options") else {
        sink.err("config.yaml must have an \"options\" key.");
        return;
    };
    if config.len() > 1 {
        let mut ignored: Vec<&Value> = config
            .keys()
            .filter(|key| !matches!(key, Value::String(name) if name == "options"))
            .collect();
        ignored.sort_by_key(|key| render::plain(key));
        let listed = Value::Sequence(ignored.into_iter().cloned().collect());
        sink.warn(&format!(
            "Ignored keys in config.yaml: {}",
            render::literal(&listed)
        ));
    }
    let Value::Mapping(options) = options else {
        sink.err("config.yaml: options section is not parsed as a dictionary");
        return;
    };
    for (name, data) in options {
        check_option(&render::plain(name), data, sink);
    }
}

fn check_option(name: &str, data: &Value, sink: &mut dyn DiagnosticSink) {
    let Value::Mapping(data) = data else {
        sink.err(&format!("config.yaml: data for option {name} is not a dict"));
        return;
    };

    let missing: Vec<&str> = KNOWN_OPTION_KEYS
        .iter()
        .copied()
        .filter(|key| !data.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        sink.warn(&format!(
            "config.yaml: option {name} does not have the keys: {}",
            missing.join(", ")
        ));
    }

    let mut unknown: Vec<String> = data
        .keys()
        .filter(|key| !matches!(key, Value::String(k) if KNOWN_OPTION_KEYS.contains(&k.as_str())))
        .map(render::plain)
        .collect();
    if !unknown.is_empty() {
        unknown.sort();
        sink.warn(&format!(
            "config.yaml: option {name} has unknown keys: {}",
            unknown.join(", ")
        ));
    }

    // An option that omits `type` is validated as a string.
    let declared = match data.get("type") {
        Some(declared) => {
            let rendered = render::plain(declared);
            if !KNOWN_OPTION_TYPES.contains(&rendered.as_str()) {
                sink.err(&format!(
                    "config.yaml: option {name} has an invalid type ({rendered})"
                ));
                return;
            }
            rendered
        }
        None => "string".to_string(),
    };

    if let Some(description) = data.get("description") {
        if !matches!(description, Value::String(text) if !text.trim().is_empty()) {
            sink.warn(&format!(
                "config.yaml: description of option {name} should be a non-empty string"
            ));
        }
    }

    let Some(default) = data.get("default") else {
        return;
    };
    if default.is_null() {
        let notice = format!("config.yaml: option {name} has no default value");
        // A boolean option always takes effect as true or false, so an
        // unset default is more suspicious there.
        if declared == "boolean" {
            sink.warn(&notice);
        } else {
            sink.info(&notice);
        }
        return;
    }
    if !default_matches(&declared, default) {
        sink.err(&format!(
            "config.yaml: type of option {name} is specified as {declared}, \
             but the type of the default value is {}",
            render::type_name(default)
        ));
    }
}

/// Whether a default value satisfies the declared option type.
///
/// Booleans count as integers, mirroring how dynamic runtimes treat a bool
/// as an integer subtype, and `float` admits any number, whole or not.
fn default_matches(option_type: &str, default: &Value) -> bool {
    match option_type {
        "string" => matches!(default, Value::String(_)),
        "int" => {
            matches!(default, Value::Bool(_))
                || matches!(default, Value::Number(n) if !n.is_f64())
        }
        "float" => matches!(default, Value::Bool(_) | Value::Number(_)),
        "boolean" => matches!(default, Value::Bool(_)),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::{MockSink, Severity};

    fn document(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    fn checked(text: &str) -> MockSink {
        let mut sink = MockSink::new();
        check_config_document(&document(text), &mut sink);
        sink
    }

    #[test]
    fn empty_document_is_an_error() {
        let sink = checked("");
        assert_eq!(sink.errors(), vec!["config.yaml not parsed into a dictionary."]);
    }

    #[test]
    fn scalar_document_is_an_error() {
        let sink = checked("not a dict");
        assert_eq!(sink.errors(), vec!["config.yaml not parsed into a dictionary."]);
    }

    #[test]
    fn missing_options_key_is_an_error() {
        let sink = checked("noise: value");
        assert_eq!(sink.errors(), vec!["config.yaml must have an \"options\" key."]);
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn extra_top_level_keys_are_warned_and_ignored() {
        let sink = checked("options: {}\nnoise: irrelevant");
        assert_eq!(sink.warnings(), vec!["Ignored keys in config.yaml: ['noise']"]);
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn extra_top_level_keys_are_sorted() {
        let sink = checked("zz: 1\noptions: {}\naa: 2");
        assert_eq!(
            sink.warnings(),
            vec!["Ignored keys in config.yaml: ['aa', 'zz']"]
        );
    }

    #[test]
    fn options_section_must_be_a_mapping() {
        let sink = checked("options: not a dict");
        assert_eq!(
            sink.errors(),
            vec!["config.yaml: options section is not parsed as a dictionary"]
        );
    }

    #[test]
    fn option_data_must_be_a_mapping() {
        let sink = checked("options:\n  foo: just a string");
        assert_eq!(
            sink.errors(),
            vec!["config.yaml: data for option foo is not a dict"]
        );
    }

    #[test]
    fn complete_option_passes() {
        let sink = checked(
            r#"
options:
  foo:
    type: string
    default: bar
    description: a thing
"#,
        );
        assert!(sink.is_empty());
    }

    #[test]
    fn missing_keys_are_listed_sorted() {
        let sink = checked("options:\n  foo:\n    type: string\n    description: d");
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo does not have the keys: default"]
        );

        let sink = checked("options:\n  foo:\n    default: d\n    description: d");
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo does not have the keys: type"]
        );

        let sink = checked("options:\n  foo: {}");
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo does not have the keys: default, description, type"]
        );
    }

    #[test]
    fn absent_type_is_checked_as_string() {
        let sink = checked("options:\n  foo:\n    default: 42\n    description: d");
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo does not have the keys: type"]
        );
        assert_eq!(
            sink.errors(),
            vec![
                "config.yaml: type of option foo is specified as string, \
                 but the type of the default value is int"
            ]
        );

        let sink = checked("options:\n  foo:\n    default: ~\n    description: d");
        assert_eq!(
            sink.infos(),
            vec!["config.yaml: option foo has no default value"]
        );
    }

    #[test]
    fn unknown_keys_are_rendered_and_sorted() {
        let sink = checked(
            r#"
options:
  foo:
    type: string
    default: bar
    description: a thing
    something: else
    42: answer
"#,
        );
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo has unknown keys: 42, something"]
        );
    }

    #[test]
    fn invalid_type_is_an_error_and_ends_the_option() {
        let sink = checked(
            r#"
options:
  foo:
    type: strr
    default: 1
    description: 9
"#,
        );
        // The bad description and default are not reported after the type
        // error.
        assert_eq!(
            sink.errors(),
            vec!["config.yaml: option foo has an invalid type (strr)"]
        );
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn description_should_be_a_non_empty_string() {
        for description in ["9", "~", "'   '"] {
            let sink = checked(&format!(
                "options:\n  foo:\n    type: string\n    default: bar\n    description: {description}"
            ));
            assert_eq!(
                sink.warnings(),
                vec!["config.yaml: description of option foo should be a non-empty string"],
                "for {description:?}"
            );
        }
    }

    #[test]
    fn default_must_agree_with_the_declared_type() {
        let sink = checked("options:\n  foo:\n    type: string\n    default: 1\n    description: d");
        assert_eq!(
            sink.errors(),
            vec![
                "config.yaml: type of option foo is specified as string, \
                 but the type of the default value is int"
            ]
        );

        let sink = checked("options:\n  foo:\n    type: int\n    default: bar\n    description: d");
        assert_eq!(
            sink.errors(),
            vec![
                "config.yaml: type of option foo is specified as int, \
                 but the type of the default value is str"
            ]
        );

        let sink = checked("options:\n  foo:\n    type: float\n    default: bar\n    description: d");
        assert_eq!(
            sink.errors(),
            vec![
                "config.yaml: type of option foo is specified as float, \
                 but the type of the default value is str"
            ]
        );
    }

    #[test]
    fn boolean_default_satisfies_numeric_types() {
        for option_type in ["int", "float"] {
            let sink = checked(&format!(
                "options:\n  foo:\n    type: {option_type}\n    default: true\n    description: d"
            ));
            assert!(sink.is_empty(), "for {option_type:?}");
        }
    }

    #[test]
    fn whole_number_default_satisfies_float() {
        let sink = checked("options:\n  foo:\n    type: float\n    default: 2\n    description: d");
        assert!(sink.is_empty());
    }

    #[test]
    fn float_default_satisfies_float() {
        let sink = checked("options:\n  foo:\n    type: float\n    default: 2.5\n    description: d");
        assert!(sink.is_empty());
    }

    #[test]
    fn float_default_does_not_satisfy_int() {
        let sink = checked("options:\n  foo:\n    type: int\n    default: 2.5\n    description: d");
        assert_eq!(
            sink.errors(),
            vec![
                "config.yaml: type of option foo is specified as int, \
                 but the type of the default value is float"
            ]
        );
    }

    #[test]
    fn null_default_is_a_notice_scaled_by_type() {
        for option_type in ["string", "int", "float"] {
            let sink = checked(&format!(
                "options:\n  foo:\n    type: {option_type}\n    default: ~\n    description: d"
            ));
            assert_eq!(
                sink.infos(),
                vec!["config.yaml: option foo has no default value"],
                "for {option_type:?}"
            );
            assert_eq!(sink.count(Severity::Warning), 0);
        }

        let sink = checked("options:\n  foo:\n    type: boolean\n    default: ~\n    description: d");
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo has no default value"]
        );
        assert_eq!(sink.count(Severity::Info), 0);
    }

    #[test]
    fn absent_default_only_reports_the_missing_key() {
        let sink = checked("options:\n  foo:\n    type: string\n    description: d");
        assert_eq!(
            sink.warnings(),
            vec!["config.yaml: option foo does not have the keys: default"]
        );
        assert_eq!(sink.calls().len(), 1);
    }

    #[test]
    fn options_are_checked_in_document_order() {
        let sink = checked(
            r#"
options:
  second: just a string
  first: also a string
"#,
        );
        assert_eq!(
            sink.errors(),
            vec![
                "config.yaml: data for option second is not a dict",
                "config.yaml: data for option first is not a dict",
            ]
        );
    }

    mod files {
        use super::*;
        use tempfile::TempDir;

        #[test]
        fn missing_file_is_an_info() {
            let temp = TempDir::new().unwrap();
            let mut sink = MockSink::new();
            check_config_file(temp.path(), &mut sink);
            assert_eq!(sink.infos(), vec!["File config.yaml not found."]);
        }

        #[test]
        fn unparsable_file_is_an_error() {
            let temp = TempDir::new().unwrap();
            std::fs::write(temp.path().join("config.yaml"), "options: {foo: [unclosed}").unwrap();
            let mut sink = MockSink::new();
            check_config_file(temp.path(), &mut sink);
            assert_eq!(sink.errors().len(), 1);
            assert!(sink.has_error("Cannot parse config.yaml: "));
        }

        #[test]
        fn valid_file_reaches_the_option_checks() {
            let temp = TempDir::new().unwrap();
            std::fs::write(
                temp.path().join("config.yaml"),
                "options:\n  foo:\n    type: string\n    default: bar\n    description: d\n",
            )
            .unwrap();
            let mut sink = MockSink::new();
            check_config_file(temp.path(), &mut sink);
            assert!(sink.is_empty());
        }
    }
}
