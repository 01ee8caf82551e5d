//! Textual rendering of parsed YAML values for diagnostic messages.
//!
//! Messages embed offending values in one of two forms: [`literal`]
//! (quoted strings, bracketed containers) when the value's shape matters,
//! and [`plain`] (bare scalars) when it is interpolated into prose.
//! [`type_name`] supplies the short names used in type-mismatch messages.

use serde_yaml::Value;

/// Render a value in literal form.
///
/// Strings are single-quoted, booleans render as `True`/`False`, null as
/// `None`, sequences as `[a, b]`, and mappings as `{k: v}` with entries in
/// insertion order.
pub fn literal(value: &Value) -> String {
    match value {
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quoted(s),
        Value::Sequence(seq) => {
            let items: Vec<String> = seq.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
        Value::Mapping(map) => {
            let entries: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}: {}", literal(k), literal(v)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Value::Tagged(tagged) => literal(&tagged.value),
    }
}

/// Render a value in plain form: strings bare, everything else as [`literal`].
pub fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => literal(other),
    }
}

/// Short type name for a value, as used in type-mismatch messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "dict",
        Value::Tagged(tagged) => type_name(&tagged.value),
    }
}

fn quoted(s: &str) -> String {
    // Prefer single quotes; switch to double quotes when the string itself
    // contains a single quote and no double quote.
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        if c == '\\' || c == quote {
            out.push('\\');
        }
        out.push(c);
    }
    out.push(quote);
    out
}
