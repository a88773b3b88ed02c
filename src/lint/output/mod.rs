//! Lint output formatters.
//!
//! This module provides formatters for outputting lint issues
//! in different formats (pretty, JSON, GitHub Actions annotations).

pub mod github;
pub mod human;
pub mod json;

use crate::lint::Issue;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Grouped, optionally colored terminal output.
    #[default]
    Pretty,
    /// A single JSON document.
    Json,
    /// GitHub Actions workflow annotations.
    Github,
}

impl OutputFormat {
    /// Resolve a format name. Unknown names fall back to [`OutputFormat::Pretty`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "github" => Self::Github,
            _ => Self::Pretty,
        }
    }

    /// Canonical name of the format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Json => "json",
            Self::Github => "github",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for formatting lint output.
pub trait LintFormatter {
    /// Format `issues` found in the linted `files` to the given writer.
    fn format<W: Write>(&self, issues: &[Issue], files: &[String], writer: &mut W)
        -> std::io::Result<()>;
}

pub use github::GithubFormatter;
pub use human::HumanFormatter;
pub use json::JsonFormatter;
