//! Line-oriented `.env` parser.
//!
//! Turns the raw text of one file into [`EnvVar`] records plus the
//! structural [`Issue`]s found along the way. Malformed content never makes
//! parsing fail; only I/O errors do.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::variable::EnvVar;
use crate::error::{EnvLintError, Result};
use crate::lint::{Issue, IssueKind};

/// Variables and structural issues collected from one file.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Every syntactically valid assignment, in file order.
    pub variables: Vec<EnvVar>,
    /// Malformed lines, empty keys, invalid key formats and empty values.
    pub issues: Vec<Issue>,
}

/// Parses env files in the `KEY=VALUE` format.
///
/// # Rules
///
/// - Blank lines and lines starting with `#` are skipped
/// - The first `=` splits key from value, so values may contain `=`
/// - Key and value are trimmed independently
/// - No quoting, escaping, interpolation or line continuation is applied
pub struct EnvFileParser;

impl EnvFileParser {
    /// Parse content already held in memory.
    ///
    /// `file` is only used to label the issues produced.
    pub fn parse_str(content: &str, file: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();
        for (idx, line) in content.lines().enumerate() {
            Self::parse_line(line, idx + 1, file, &mut outcome);
        }
        outcome
    }

    /// Read and parse a file, labelling issues with its displayed path.
    ///
    /// Fails only when the file cannot be read. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use envlint::parse::EnvFileParser;
    /// use std::path::Path;
    ///
    /// let outcome = EnvFileParser::parse_file(Path::new(".env")).unwrap();
    /// for var in &outcome.variables {
    ///     println!("{}={} (line {})", var.key, var.value, var.line);
    /// }
    /// ```
    pub fn parse_file(path: &Path) -> Result<ParseOutcome> {
        Self::parse_file_as(path, &path.display().to_string())
    }

    /// Read and parse a file, labelling issues with `label`.
    pub fn parse_file_as(path: &Path, label: &str) -> Result<ParseOutcome> {
        let bytes = fs::read(path).map_err(|source| EnvLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            debug!("{} contains invalid UTF-8, decoding lossily", label);
        }

        let outcome = Self::parse_str(&content, label);
        debug!(
            "Parsed {}: {} variable(s), {} issue(s)",
            label,
            outcome.variables.len(),
            outcome.issues.len()
        );
        Ok(outcome)
    }

    /// Parse a single physical line.
    fn parse_line(raw: &str, line_num: usize, file: &str, outcome: &mut ParseOutcome) {
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            return;
        }

        let Some((key, value)) = line.split_once('=') else {
            let recommendation = if line.contains(['"', '\'']) {
                "Check for improperly quoted values containing '=' signs"
            } else {
                "Use KEY=VALUE format"
            };
            outcome.issues.push(
                Issue::new(IssueKind::MalformedLine, line, file)
                    .at_line(line_num)
                    .with_recommendation(recommendation)
                    .with_recommendation("Comment the line out with '#' if it is not an assignment"),
            );
            return;
        };

        let key = key.trim();
        let value = value.trim();

        if key.is_empty() {
            outcome.issues.push(
                Issue::new(IssueKind::EmptyKey, line, file)
                    .at_line(line_num)
                    .with_recommendation("Add a variable name before the '=' sign"),
            );
            return;
        }

        if key.contains([' ', '\t']) {
            outcome.issues.push(
                Issue::new(IssueKind::InvalidKeyFormat, key, file)
                    .at_line(line_num)
                    .with_recommendation("Variable names cannot contain spaces or tabs")
                    .with_recommendation("Use underscores (_) to separate words"),
            );
        }

        if value.is_empty() {
            outcome.issues.push(
                Issue::new(IssueKind::EmptyValue, key, file)
                    .at_line(line_num)
                    .with_recommendation("Add the variable value to your .env file")
                    .with_recommendation("Remove the variable if it is not needed"),
            );
        }

        outcome.variables.push(EnvVar::new(key, value, line_num));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn kinds(outcome: &ParseOutcome) -> Vec<IssueKind> {
        outcome.issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn parses_simple_assignments() {
        let outcome = EnvFileParser::parse_str("KEY1=value1\nKEY2=value2\nKEY3=value3", ".env");

        assert_eq!(outcome.variables.len(), 3);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.variables[2], EnvVar::new("KEY3", "value3", 3));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "# comment\n\n   \nKEY=value\n  # indented comment\n";
        let outcome = EnvFileParser::parse_str(content, ".env");

        assert_eq!(outcome.variables.len(), 1);
        assert_eq!(outcome.variables[0].line, 4);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn splits_on_first_equals_only() {
        let outcome = EnvFileParser::parse_str("URL=https://example.com?foo=bar", ".env");

        assert_eq!(outcome.variables[0].value, "https://example.com?foo=bar");
    }

    #[test]
    fn trims_key_and_value() {
        let outcome = EnvFileParser::parse_str("  KEY  =   value with spaces  ", ".env");

        assert_eq!(outcome.variables[0].key, "KEY");
        assert_eq!(outcome.variables[0].value, "value with spaces");
    }

    #[test]
    fn keeps_quotes_verbatim() {
        let outcome = EnvFileParser::parse_str("NAME=\"quoted\"", ".env");

        assert_eq!(outcome.variables[0].value, "\"quoted\"");
    }

    #[test]
    fn reports_line_without_equals() {
        let outcome = EnvFileParser::parse_str("KEY=1\nMALFORMED LINE WITHOUT EQUALS", ".env");

        assert_eq!(outcome.variables.len(), 1);
        assert_eq!(kinds(&outcome), vec![IssueKind::MalformedLine]);
        let issue = &outcome.issues[0];
        assert_eq!(issue.subject, "MALFORMED LINE WITHOUT EQUALS");
        assert_eq!(issue.first_line, 2);
        assert!(issue.recommendations[0].contains("KEY=VALUE"));
    }

    #[test]
    fn reports_empty_key_without_recording() {
        let outcome = EnvFileParser::parse_str("=value", ".env");

        assert!(outcome.variables.is_empty());
        assert_eq!(kinds(&outcome), vec![IssueKind::EmptyKey]);
    }

    #[test]
    fn invalid_key_format_still_records_variable() {
        let outcome = EnvFileParser::parse_str("MY KEY=value", ".env");

        assert_eq!(outcome.variables.len(), 1);
        assert_eq!(outcome.variables[0].key, "MY KEY");
        assert_eq!(kinds(&outcome), vec![IssueKind::InvalidKeyFormat]);
    }

    #[test]
    fn empty_value_is_reported_and_recorded() {
        let outcome = EnvFileParser::parse_str("EMPTY_VAR=", ".env");

        assert_eq!(outcome.variables, vec![EnvVar::new("EMPTY_VAR", "", 1)]);
        assert_eq!(kinds(&outcome), vec![IssueKind::EmptyValue]);
        assert_eq!(outcome.issues[0].subject, "EMPTY_VAR");
    }

    #[test]
    fn n_valid_lines_give_n_records_and_no_structural_issues() {
        let content: String = (0..25).map(|i| format!("VAR_{}=value{}\n", i, i)).collect();
        let outcome = EnvFileParser::parse_str(&content, ".env");

        assert_eq!(outcome.variables.len(), 25);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn issues_carry_file_label() {
        let outcome = EnvFileParser::parse_str("oops", "config/.env.local");

        assert_eq!(outcome.issues[0].file, "config/.env.local");
    }

    #[test]
    fn parse_file_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "PORT=8080\n\nPORT=3000\n").unwrap();

        let outcome = EnvFileParser::parse_file(&path).unwrap();

        assert_eq!(outcome.variables.len(), 2);
        assert_eq!(outcome.variables[1].line, 3);
    }

    #[test]
    fn parse_file_tolerates_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, b"PORT=1\nPORT=2\nNAME=caf\xe9\nMALFORMED\n").unwrap();

        let outcome = EnvFileParser::parse_file(&path).unwrap();

        assert_eq!(outcome.variables.len(), 3);
        assert_eq!(outcome.variables[2].key, "NAME");
        assert!(outcome.variables[2].value.starts_with("caf"));
        assert_eq!(kinds(&outcome), vec![IssueKind::MalformedLine]);
        assert_eq!(outcome.issues[0].first_line, 4);
    }

    #[test]
    fn parse_file_as_labels_issues() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "NO_EQUALS\n").unwrap();

        let outcome = EnvFileParser::parse_file_as(&path, ".env").unwrap();

        assert_eq!(outcome.issues[0].file, ".env");
    }

    #[test]
    fn parse_file_missing_is_hard_error() {
        let result = EnvFileParser::parse_file(Path::new("/nonexistent/path/.env"));

        assert!(matches!(result, Err(EnvLintError::FileRead { .. })));
    }
}
