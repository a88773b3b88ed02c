//! JSON output formatter.
//!
//! Formats lint issues as machine-readable JSON for tooling integration.

use super::LintFormatter;
use crate::lint::Issue;
use serde::Serialize;
use std::io::Write;

/// Formats lint output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    issues: Vec<JsonIssue<'a>>,
    files: &'a [String],
    count: usize,
}

#[derive(Serialize)]
struct JsonIssue<'a> {
    kind: &'static str,
    name: &'static str,
    severity: String,
    key: &'a str,
    file: &'a str,
    first_line: usize,
    last_line: usize,
    recommendations: &'a [String],
}

impl<'a> From<&'a Issue> for JsonIssue<'a> {
    fn from(issue: &'a Issue) -> Self {
        Self {
            kind: issue.kind.code(),
            name: issue.kind.label(),
            severity: issue.severity().to_string(),
            key: &issue.subject,
            file: &issue.file,
            first_line: issue.first_line,
            last_line: issue.last_line,
            recommendations: &issue.recommendations,
        }
    }
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LintFormatter for JsonFormatter {
    fn format<W: Write>(
        &self,
        issues: &[Issue],
        files: &[String],
        writer: &mut W,
    ) -> std::io::Result<()> {
        let output = JsonOutput {
            issues: issues.iter().map(JsonIssue::from).collect(),
            files,
            count: issues.len(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::IssueKind;

    fn render(issues: &[Issue], files: &[String]) -> serde_json::Value {
        let mut output = Vec::new();
        JsonFormatter::new().format(issues, files, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn produces_valid_json() {
        let issues = vec![Issue::new(IssueKind::Duplicate, "PORT", ".env").spanning(1, 3)];

        let parsed = render(&issues, &[".env".to_string()]);

        assert!(parsed["issues"].is_array());
        assert_eq!(parsed["count"], 1);
        assert_eq!(parsed["files"][0], ".env");
    }

    #[test]
    fn issue_fields() {
        let issues = vec![Issue::new(IssueKind::EmptyValue, "X_VAR", "a.env")
            .at_line(4)
            .with_recommendation("Set it")];

        let parsed = render(&issues, &[]);
        let issue = &parsed["issues"][0];

        assert_eq!(issue["kind"], "empty-value");
        assert_eq!(issue["name"], "empty value");
        assert_eq!(issue["severity"], "warning");
        assert_eq!(issue["key"], "X_VAR");
        assert_eq!(issue["file"], "a.env");
        assert_eq!(issue["first_line"], 4);
        assert_eq!(issue["last_line"], 4);
        assert_eq!(issue["recommendations"][0], "Set it");
    }

    #[test]
    fn missing_issue_has_zero_lines() {
        let issues = vec![Issue::new(IssueKind::MissingRequired, "API_KEY", ".env")];

        let parsed = render(&issues, &[]);

        assert_eq!(parsed["issues"][0]["first_line"], 0);
        assert_eq!(parsed["issues"][0]["severity"], "error");
    }

    #[test]
    fn empty_report() {
        let parsed = render(&[], &[".env".to_string()]);

        assert_eq!(parsed["count"], 0);
        assert_eq!(parsed["issues"].as_array().unwrap().len(), 0);
    }
}
