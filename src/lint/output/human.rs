//! Human-readable output formatter.
//!
//! Groups issues by file, sorts them by line and prints recommendations
//! under each issue, with optional color support.

use super::LintFormatter;
use crate::lint::{Issue, Severity};
use crate::ui::{kind_icon, Theme};
use std::collections::BTreeMap;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    theme: Theme,
    quiet: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            theme: Theme::for_color(use_color),
            quiet: false,
        }
    }

    /// Suppress the success message when there is nothing to report.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn write_issue<W: Write>(&self, issue: &Issue, writer: &mut W) -> std::io::Result<()> {
        let icon = kind_icon(issue.kind);
        let headline = if issue.is_range() {
            format!(
                "  {} Line {}-{}: {} '{}'",
                icon, issue.first_line, issue.last_line, issue.kind, issue.subject
            )
        } else if issue.has_location() {
            format!(
                "  {} Line {}: {} '{}'",
                icon,
                issue.primary_line(),
                issue.kind,
                issue.subject
            )
        } else {
            format!("  {} {} '{}'", icon, issue.kind, issue.subject)
        };
        writeln!(writer, "{}", self.theme.kind_style(issue.kind).apply_to(headline))?;

        for recommendation in &issue.recommendations {
            writeln!(
                writer,
                "{}",
                self.theme.dim.apply_to(format!("    💡 {}", recommendation))
            )?;
        }

        Ok(())
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        issues: &[Issue],
        _files: &[String],
        writer: &mut W,
    ) -> std::io::Result<()> {
        if issues.is_empty() {
            if !self.quiet {
                writeln!(writer, "{}", self.theme.format_success("No issues found"))?;
            }
            return Ok(());
        }

        let mut by_file: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
        for issue in issues {
            by_file.entry(issue.file.as_str()).or_default().push(issue);
        }

        writeln!(writer, "{}", self.theme.format_header("Issues found:"))?;
        writeln!(writer)?;

        let file_count = by_file.len();
        for (file, mut file_issues) in by_file {
            writeln!(writer, "{}", self.theme.file.apply_to(format!("📁 {}", file)))?;
            writeln!(
                writer,
                "{}",
                self.theme
                    .dim
                    .apply_to("─".repeat(file.chars().count() + 4))
            )?;

            // Stable sort keeps rule order for issues on the same line
            file_issues.sort_by_key(|issue| issue.primary_line());
            for issue in file_issues {
                self.write_issue(issue, writer)?;
            }
            writeln!(writer)?;
        }

        let errors = issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count();
        let warnings = issues.len() - errors;
        writeln!(
            writer,
            "{}",
            self.theme.highlight.apply_to(format!(
                "Found {} issue(s) across {} file(s) ({} error(s), {} warning(s))",
                issues.len(),
                file_count,
                errors,
                warnings
            ))
        )?;

        Ok(())
    }
}
