//! Charm source directory handle.
//!
//! A [`Charm`] wraps the path to an unpacked charm and knows which
//! documents a proof covers: `metadata.yaml` (mandatory), `config.yaml`
//! (optional) and `actions.yaml` (optional). Document-level defects are
//! reported through the sink like any other finding; only a missing
//! directory is a hard error.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;

use crate::error::{CharmlintError, Result};
use crate::lint::{check_config_file, proof_metadata, rules, DiagnosticSink};

/// An unpacked charm on disk.
#[derive(Debug, Clone)]
pub struct Charm {
    root: PathBuf,
}

impl Charm {
    /// Open a charm source directory.
    pub fn at(path: impl Into<PathBuf>) -> Result<Self> {
        let root = path.into();
        if !root.is_dir() {
            return Err(CharmlintError::CharmNotFound { path: root });
        }
        Ok(Self { root })
    }

    /// The charm's root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run the full proof over this charm, reporting through `sink`.
    ///
    /// Documents are checked in a fixed order: metadata, config, actions.
    pub fn proof(&self, sink: &mut dyn DiagnosticSink) {
        tracing::debug!("Running proof for {}", self.root.display());
        self.proof_metadata_file(sink);
        check_config_file(&self.root, sink);
        self.proof_actions_file(sink);
    }

    fn proof_metadata_file(&self, sink: &mut dyn DiagnosticSink) {
        let path = self.root.join("metadata.yaml");
        if !path.is_file() {
            sink.err("File metadata.yaml not found.");
            return;
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) => {
                sink.err(&format!("Cannot parse metadata.yaml: {error}"));
                return;
            }
        };
        let metadata: Value = match serde_yaml::from_str(&text) {
            Ok(metadata) => metadata,
            Err(error) => {
                sink.err(&format!("Cannot parse metadata.yaml: {error}"));
                return;
            }
        };
        let Value::Mapping(metadata) = metadata else {
            sink.err("metadata.yaml not parsed into a dictionary.");
            return;
        };
        proof_metadata(&metadata, sink);
    }

    fn proof_actions_file(&self, sink: &mut dyn DiagnosticSink) {
        let path = self.root.join("actions.yaml");
        if !path.is_file() {
            return;
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) => {
                sink.err(&format!("Cannot parse actions.yaml: {error}"));
                return;
            }
        };
        let actions: Value = match serde_yaml::from_str(&text) {
            Ok(actions) => actions,
            Err(error) => {
                sink.err(&format!("Cannot parse actions.yaml: {error}"));
                return;
            }
        };
        rules::actions::check(&actions, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Linter;
    use tempfile::TempDir;

    const VALID_METADATA: &str = r#"
name: peanut-butter
display-name: Peanut Butter
summary: spreads evenly
maintainer: Tester <tester@example.com>
tags: [applications]
"#;

    fn proofed(temp: &TempDir) -> Linter {
        let charm = Charm::at(temp.path()).unwrap();
        let mut linter = Linter::new();
        charm.proof(&mut linter);
        linter
    }

    #[test]
    fn at_rejects_a_missing_directory() {
        let result = Charm::at("/nonexistent/charm");
        assert!(matches!(result, Err(CharmlintError::CharmNotFound { .. })));
    }

    #[test]
    fn at_accepts_an_existing_directory() {
        let temp = TempDir::new().unwrap();
        let charm = Charm::at(temp.path()).unwrap();
        assert_eq!(charm.root(), temp.path());
    }

    #[test]
    fn empty_directory_reports_both_missing_files() {
        let temp = TempDir::new().unwrap();
        let linter = proofed(&temp);
        assert_eq!(
            linter.messages(),
            vec![
                "E: File metadata.yaml not found.",
                "I: File config.yaml not found.",
            ]
        );
    }

    #[test]
    fn complete_charm_passes_quietly() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.yaml"), VALID_METADATA).unwrap();
        fs::write(
            temp.path().join("config.yaml"),
            "options:\n  foo:\n    type: string\n    default: bar\n    description: d\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("actions.yaml"),
            "snapshot:\n  description: take a snapshot\n",
        )
        .unwrap();

        let linter = proofed(&temp);
        assert_eq!(linter.messages(), Vec::<String>::new());
    }

    #[test]
    fn unparsable_metadata_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.yaml"), "name: [unclosed").unwrap();

        let linter = proofed(&temp);
        assert!(linter.has_errors());
        assert!(linter.messages()[0].starts_with("E: Cannot parse metadata.yaml: "));
    }

    #[test]
    fn scalar_metadata_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.yaml"), "just a string").unwrap();

        let linter = proofed(&temp);
        assert_eq!(
            linter.messages()[0],
            "E: metadata.yaml not parsed into a dictionary."
        );
    }

    #[test]
    fn actions_are_checked_when_present() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.yaml"), VALID_METADATA).unwrap();
        fs::write(temp.path().join("actions.yaml"), "juju-do:\n  description: d\n").unwrap();

        let linter = proofed(&temp);
        let messages = linter.messages();
        assert!(messages
            .contains(&"E: actions.juju-do: juju- is a reserved prefix for action names".into()));
    }

    #[test]
    fn unparsable_actions_are_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("metadata.yaml"), VALID_METADATA).unwrap();
        fs::write(temp.path().join("actions.yaml"), "snapshot: [unclosed").unwrap();

        let linter = proofed(&temp);
        assert!(linter
            .messages()
            .iter()
            .any(|m| m.starts_with("E: Cannot parse actions.yaml: ")));
    }
}
