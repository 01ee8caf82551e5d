//! Minimum Juju version validation.
//!
//! `min-juju-version` takes a Juju release string: `X.Y.Z`, with an
//! optional `-tagN` pre-release segment in place of the patch separator and
//! an optional trailing build number. The field only exists from Juju 2
//! onward, so anything below 2.0.0 cannot be expressed.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Mapping;

use crate::lint::{render, DiagnosticSink};

static JUJU_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,9})\.\d{1,9}(?:\.|-[a-z]+)\d{1,9}(?:\.\d{1,9})?$")
        .expect("juju version pattern must compile")
});

pub fn check(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    let Some(value) = charm.get("min-juju-version") else {
        return;
    };
    let rendered = render::plain(value);
    let Some(captures) = JUJU_VERSION.captures(&rendered) else {
        sink.err("min-juju-version: invalid format, try X.Y.Z");
        return;
    };
    let major: u64 = captures[1].parse().unwrap_or(0);
    if major < 2 {
        sink.err("min-juju-version: invalid version, must be 2.0.0 or greater");
    }
}
