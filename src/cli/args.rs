//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Charmlint - Static analysis for charm metadata.
#[derive(Debug, Parser)]
#[command(name = "charmlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a charm for problems (default if no command specified)
    Proof(ProofArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `proof` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ProofArgs {
    /// Path to the charm directory
    #[arg(default_value = ".")]
    pub charm: PathBuf,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl Default for ProofArgs {
    fn default() -> Self {
        Self {
            charm: PathBuf::from("."),
            format: "human".to_string(),
            strict: false,
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
