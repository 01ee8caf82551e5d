//! Fixed-order metadata proof.
//!
//! Runs every facet checker over one parsed `metadata.yaml` mapping.
//! Checkers are independent, so the order only exists to keep repeated
//! proofs of the same charm byte-identical; it is part of the observable
//! contract and tests pin it.

use serde_yaml::Mapping;

use super::rules;
use super::sink::DiagnosticSink;

/// Prove a parsed metadata mapping, reporting through `sink`.
///
/// `actions.yaml` and `config.yaml` have their own documents and are
/// checked separately; see [`rules::actions`] and
/// [`super::config_file::check_config_file`].
pub fn proof_metadata(charm: &Mapping, sink: &mut dyn DiagnosticSink) {
    rules::display_name::check(charm, sink);
    rules::maintainer::check(charm, sink);
    rules::categories::check(charm, sink);
    rules::series::check(charm, sink);
    rules::terms::check(charm, sink);
    rules::min_juju_version::check(charm, sink);
    rules::extra_bindings::check(charm, sink);
    rules::storage::check(charm, sink);
    rules::resources::check(charm, sink);
    rules::payloads::check(charm, sink);
}
