//! Tags and categories validation.
//!
//! `tags` replaced the older `categories` field. At least one of the two
//! must be present; `categories` always draws a warning, either for being
//! malformed or, when well formed, for being deprecated.

use serde_yaml::{Mapping, Value};

use crate::lint::DiagnosticSink;

const KNOWN_CATEGORIES: &[&str] = &[
    "applications",
    "app-servers",
    "databases",
    "file-servers",
    "cache-proxy",
    "misc",
];

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    let tags = charm.get("tags");
    let categories = charm.get("categories");
    if tags.is_none() && categories.is_none() {
        sink.warn("Metadata missing required field \"tags\"");
        return;
    }

    if let Some(tags) = tags {
        if !matches!(tags, Value::Sequence(list) if !list.is_empty()) {
            sink.warn("Metadata field \"tags\" must be a non-empty list");
        }
    }

    if let Some(categories) = categories {
        if valid_categories(categories) {
            sink.warn(
                "Categories are being deprecated in favor of tags. \
                 Please rename the \"categories\" field to \"tags\".",
            );
        } else {
            sink.warn(
                "Categories metadata must be a list of one or more of: \
                 applications, app-servers, databases, file-servers, cache-proxy, misc",
            );
        }
    }
}

fn valid_categories(value: &Value) -> bool {
    let Value::Sequence(list) = value else {
        return false;
    };
    !list.is_empty()
        && list.iter().all(|entry| {
            matches!(entry, Value::String(name) if KNOWN_CATEGORIES.contains(&name.as_str()))
        })
}
