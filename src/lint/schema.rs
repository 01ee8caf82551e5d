//! Static schema tables for keyed definition blocks.
//!
//! Storage, resource, and payload declarations all share one shape: a
//! mapping from definition names to definition mappings, each validated
//! against a per-facet [`FacetSchema`] listing required and optional keys
//! with a value [`Constraint`] per key. The tables are process-wide
//! immutable statics, built once on first use.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};

use super::render;
use super::sink::DiagnosticSink;

/// Constraint applied to a single key's value within a definition.
pub enum Constraint {
    /// Value, rendered as text, must be one of the listed strings.
    OneOf(&'static [&'static str]),
    /// Value must be a boolean, in either native or string spelling.
    Flag,
    /// Value, rendered as text, must match the pattern.
    Matches {
        pattern: Regex,
        message: &'static str,
    },
    /// Value must be a mapping validated against a sub-schema.
    Nested(FacetSchema),
    /// Any value is accepted; only presence matters.
    Any,
}

impl Constraint {
    fn check(&self, scope: &str, value: &Value, sink: &mut dyn DiagnosticSink) {
        match self {
            Constraint::Any => {}
            Constraint::OneOf(allowed) => {
                let rendered = render::plain(value);
                if !allowed.contains(&rendered.as_str()) {
                    sink.err(&format!(
                        "{scope}: \"{rendered}\" is not one of {}",
                        allowed.join(", ")
                    ));
                }
            }
            Constraint::Flag => {
                let rendered = render::plain(value);
                if !rendered.eq_ignore_ascii_case("true") && !rendered.eq_ignore_ascii_case("false")
                {
                    sink.err(&format!("{scope}: \"{rendered}\" is not one of true, false"));
                }
            }
            Constraint::Matches { pattern, message } => {
                if !pattern.is_match(&render::plain(value)) {
                    sink.err(&format!("{scope}: {message}"));
                }
            }
            Constraint::Nested(schema) => schema.validate(scope, value, sink),
        }
    }
}

/// Required and optional keys for one definition shape.
pub struct FacetSchema {
    required: Vec<(&'static str, Constraint)>,
    optional: Vec<(&'static str, Constraint)>,
}

impl FacetSchema {
    /// Validate one definition against this schema.
    ///
    /// Reports every violation independently: missing required keys, value
    /// constraint failures, and unrecognized keys (the latter collected
    /// into a single error listing the offending sub-mapping).
    pub fn validate(&self, scope: &str, definition: &Value, sink: &mut dyn DiagnosticSink) {
        let Value::Mapping(map) = definition else {
            sink.err(&format!("{scope}: must be a dictionary"));
            return;
        };

        for (key, constraint) in &self.required {
            match map.get(*key) {
                Some(value) => constraint.check(&format!("{scope}.{key}"), value, sink),
                None => sink.err(&format!("{scope}.{key}: required key is missing")),
            }
        }
        for (key, constraint) in &self.optional {
            if let Some(value) = map.get(*key) {
                constraint.check(&format!("{scope}.{key}"), value, sink);
            }
        }

        let mut unknown: Vec<(&Value, &Value)> =
            map.iter().filter(|(key, _)| !self.knows(key)).collect();
        if !unknown.is_empty() {
            unknown.sort_by_key(|(key, _)| render::plain(key));
            let mut offending = Mapping::new();
            for (key, value) in unknown {
                offending.insert(key.clone(), value.clone());
            }
            sink.err(&format!(
                "{scope}: Unrecognized keys in mapping: \"{}\"",
                render::literal(&Value::Mapping(offending))
            ));
        }
    }

    fn knows(&self, key: &Value) -> bool {
        let Value::String(name) = key else {
            return false;
        };
        self.required.iter().any(|(k, _)| k == name)
            || self.optional.iter().any(|(k, _)| k == name)
    }
}

/// Validate a facet holding named definitions (`storage`, `resources`,
/// `payloads`).
///
/// The facet is optional; when present its value must be a non-empty
/// mapping of definition names to definitions, each checked against
/// `schema` under the scope `<facet>.<name>`.
pub fn check_definitions(
    charm: &Mapping,
    facet: &str,
    noun: &str,
    schema: &FacetSchema,
    sink: &mut dyn DiagnosticSink,
) {
    let Some(value) = charm.get(facet) else {
        return;
    };
    let defs = match value {
        Value::Mapping(defs) if !defs.is_empty() => defs,
        _ => {
            sink.err(&format!(
                "{facet}: must be a dictionary of {noun} definitions"
            ));
            return;
        }
    };
    for (name, definition) in defs {
        let scope = format!("{facet}.{}", render::plain(name));
        schema.validate(&scope, definition, sink);
    }
}

/// Storage definition schema.
pub static STORAGE_SCHEMA: LazyLock<FacetSchema> = LazyLock::new(|| FacetSchema {
    required: vec![("type", Constraint::OneOf(&["filesystem", "block"]))],
    optional: vec![
        ("description", Constraint::Any),
        ("location", Constraint::Any),
        ("shared", Constraint::Flag),
        ("read-only", Constraint::Flag),
        (
            "minimum-size",
            Constraint::Matches {
                pattern: Regex::new(r"^\d+[MGTP]?$").expect("minimum-size pattern must compile"),
                message: "must be a number followed by an optional M/G/T/P, e.g. 100M",
            },
        ),
        (
            "multiple",
            Constraint::Nested(FacetSchema {
                required: vec![(
                    "range",
                    Constraint::Matches {
                        pattern: Regex::new(r"^\d+(-\d*)?$").expect("range pattern must compile"),
                        message: "supported formats are: m (a fixed number), \
                                  m-n (an explicit range), and m- (a minimum number)",
                    },
                )],
                optional: vec![],
            }),
        ),
    ],
});

/// Resource definition schema.
pub static RESOURCE_SCHEMA: LazyLock<FacetSchema> = LazyLock::new(|| FacetSchema {
    required: vec![("type", Constraint::OneOf(&["file"]))],
    optional: vec![("filename", Constraint::Any)],
});

/// Payload definition schema.
pub static PAYLOAD_SCHEMA: LazyLock<FacetSchema> = LazyLock::new(|| FacetSchema {
    required: vec![("type", Constraint::OneOf(&["kvm", "docker"]))],
    optional: vec![],
});
