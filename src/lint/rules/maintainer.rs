//! Maintainer contact validation.
//!
//! A charm declares contact information in exactly one of two spellings:
//! a single `maintainer` string or a `maintainers` list. Each entry should
//! follow the RFC 2822 `Name <Email>` convention; entries are reparsed and
//! reformatted, and a mismatch against the original text is a warning.

use serde_yaml::{Mapping, Value};

use crate::lint::{render, DiagnosticSink};

/// Characters that force the display name into a quoted string when an
/// address is formatted.
const SPECIALS: &[char] = &[
    ']', '[', '\\', '(', ')', '<', '>', '@', ',', ':', ';', '"', '.',
];

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    let entries: Vec<&Value> = match (charm.get("maintainer"), charm.get("maintainers")) {
        (Some(_), Some(_)) => {
            sink.err("Charm must not have both maintainer and maintainers fields");
            return;
        }
        (None, None) => {
            sink.err("Charm must have either a maintainer or maintainers field");
            return;
        }
        (Some(Value::Sequence(_)), None) => {
            sink.err("Maintainer field must not be a list");
            return;
        }
        (Some(single), None) => vec![single],
        (None, Some(Value::Sequence(list))) => list.iter().collect(),
        (None, Some(_)) => {
            sink.err("Maintainers field must be a list");
            return;
        }
    };

    for entry in entries {
        let Value::String(text) = entry else {
            sink.err(&format!(
                "Maintainer entry must be a string, not \"{}\"",
                render::literal(entry)
            ));
            continue;
        };
        let (name, addr) = parse_addr(text);
        let formatted = format_addr(&name, &addr);
        if formatted.replace('"', "") != *text {
            sink.warn(&format!(
                "Maintainer format should be \"Name <Email>\", not \"{formatted}\""
            ));
        }
    }
}

/// Split one entry into a display name and an address.
///
/// Without angle brackets the whole entry is taken as the address, with
/// whitespace-separated words concatenated the way a mailbox parser folds
/// adjacent atoms.
fn parse_addr(entry: &str) -> (String, String) {
    let Some(open) = entry.find('<') else {
        return (String::new(), entry.split_whitespace().collect());
    };
    let name = entry[..open].trim();
    let name = match name.strip_prefix('"').and_then(|n| n.strip_suffix('"')) {
        Some(quoted) => quoted.replace("\\\"", "\"").replace("\\\\", "\\"),
        None => name.to_string(),
    };
    let rest = &entry[open + 1..];
    let addr = match rest.find('>') {
        Some(close) => &rest[..close],
        None => rest,
    };
    (name, addr.trim().to_string())
}

/// Render a display name and address back into mailbox form, quoting the
/// name when it contains specials.
fn format_addr(name: &str, addr: &str) -> String {
    if name.is_empty() {
        return addr.to_string();
    }
    let escaped = name.replace('\\', "\\\\").replace('"', "\\\"");
    if name.contains(SPECIALS) {
        format!("\"{escaped}\" <{addr}>")
    } else {
        format!("{escaped} <{addr}>")
    }
}
