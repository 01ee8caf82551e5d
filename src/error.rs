//! Error types for charmlint operations.
//!
//! This module defines [`CharmlintError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! Proof findings are not errors: malformed metadata is reported through
//! the diagnostic sink and a proof run still succeeds. `CharmlintError`
//! covers the cases where no proof can be run at all.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for charmlint operations.
#[derive(Debug, Error)]
pub enum CharmlintError {
    /// The given path is not a charm source directory.
    #[error("No charm directory found at {path}")]
    CharmNotFound { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for charmlint operations.
pub type Result<T> = std::result::Result<T, CharmlintError>;
