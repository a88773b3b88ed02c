//! GitHub Actions annotation formatter.
//!
//! Emits one workflow command per issue so findings show up inline on
//! pull requests.

use super::LintFormatter;
use crate::lint::{Issue, Severity};
use std::io::Write;

/// Formats lint output as `::error`/`::warning` workflow commands.
#[derive(Debug, Default)]
pub struct GithubFormatter;

impl GithubFormatter {
    /// Create a new GitHub formatter.
    pub fn new() -> Self {
        Self
    }
}

impl LintFormatter for GithubFormatter {
    fn format<W: Write>(
        &self,
        issues: &[Issue],
        _files: &[String],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for issue in issues {
            let level = match issue.severity() {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            // Annotations need a line; file-level issues point at the first
            let line = match issue.primary_line() {
                0 => 1,
                line => line,
            };

            writeln!(
                writer,
                "::{} file={},line={}::{}",
                level,
                escape_property(&issue.file),
                line,
                escape_data(&format!("{} '{}'", issue.kind, issue.subject))
            )?;
        }

        Ok(())
    }
}

/// Escape a workflow command message.
fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property value such as `file=`.
fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
