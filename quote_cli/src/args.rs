//! Command-line arguments for the quote shell.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Manage an in-memory collection of quotes", long_about = None)]
pub struct Args {
    /// JSON file with an array of `{ "text", "author", "category" }` entries to start with.
    /// Replaces the built-in starter quotes.
    #[clap(long, conflicts_with = "empty")]
    pub seed: Option<String>,

    /// Start with no quotes at all.
    #[clap(long)]
    pub empty: bool,

    /// Read shell commands from this file instead of stdin.
    #[clap(long)]
    pub script: Option<String>,
}

impl Args {
    /// Seed file path, if one was given.
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed.as_deref().map(normalize_path)
    }

    /// Script file path, if one was given.
    pub fn script_path(&self) -> Option<PathBuf> {
        self.script.as_deref().map(normalize_path)
    }
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
