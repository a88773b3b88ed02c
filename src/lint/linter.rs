//! Lint orchestration.
//!
//! The [`Linter`] parses each target file, runs the rule registry over the
//! resulting variables and merges parse issues with rule issues. A file that
//! cannot be read is recorded as a failure and the remaining files are still
//! linted.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::issue::{Issue, IssueKind};
use super::registry::RuleRegistry;
use super::rule::LintRule;
use crate::config::{LintConfig, RuleToggles};
use crate::error::{EnvLintError, Result};
use crate::parse::{EnvFileParser, EnvVar, ParseOutcome};

/// Lint results for a single file.
#[derive(Debug, Clone)]
pub struct FileLintResult {
    /// File name as reported in issues.
    pub file: String,
    /// Variables recorded by the parser.
    pub variables: Vec<EnvVar>,
    /// Structural issues kept after filtering.
    pub parse_issues: Vec<Issue>,
    /// Issues produced by the rules.
    pub rule_issues: Vec<Issue>,
}

impl FileLintResult {
    /// Parse issues followed by rule issues.
    pub fn all_issues(&self) -> Vec<Issue> {
        self.parse_issues
            .iter()
            .chain(&self.rule_issues)
            .cloned()
            .collect()
    }

    /// Total number of issues.
    pub fn issue_count(&self) -> usize {
        self.parse_issues.len() + self.rule_issues.len()
    }
}

/// A file that could not be linted.
#[derive(Debug)]
pub struct LintFailure {
    pub path: PathBuf,
    pub error: EnvLintError,
}

/// Results of linting a set of files.
#[derive(Debug, Default)]
pub struct LintReport {
    /// Per-file results, in input order.
    pub results: Vec<FileLintResult>,
    /// Files that failed with a hard error.
    pub failures: Vec<LintFailure>,
}

impl LintReport {
    /// All issues of all files, merged in file order.
    pub fn issues(&self) -> Vec<Issue> {
        self.results.iter().flat_map(|r| r.all_issues()).collect()
    }

    /// Names of the files that were linted successfully.
    pub fn files(&self) -> Vec<String> {
        self.results.iter().map(|r| r.file.clone()).collect()
    }

    /// Total number of issues.
    pub fn issue_count(&self) -> usize {
        self.results.iter().map(FileLintResult::issue_count).sum()
    }

    /// Whether any issue was found.
    pub fn has_issues(&self) -> bool {
        self.issue_count() > 0
    }

    /// Whether any file failed to lint.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Record the outcome of linting `path`.
    pub fn add(&mut self, path: &Path, outcome: Result<FileLintResult>) {
        match outcome {
            Ok(result) => self.results.push(result),
            Err(error) => {
                warn!(file = %path.display(), %error, "Failed to lint file");
                self.failures.push(LintFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
}

/// Parses files and evaluates lint rules against them.
///
/// # Example
///
/// ```
/// use envlint::lint::{IssueKind, Linter};
///
/// let linter = Linter::default();
/// let result = linter.lint_str("PORT=1\nPORT=2\n", ".env");
///
/// assert_eq!(result.rule_issues[0].kind, IssueKind::Duplicate);
/// ```
pub struct Linter {
    registry: RuleRegistry,
    syntax_issues: bool,
    empty_value_issues: bool,
}

impl Linter {
    /// Create a linter that runs `registry` and keeps every parse issue.
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            syntax_issues: true,
            empty_value_issues: true,
        }
    }

    /// Create a linter from configuration.
    ///
    /// `required` is the full required-variable list, which may include
    /// names found by a project scan in addition to the configured ones.
    pub fn from_config(config: &LintConfig, required: &[String]) -> Self {
        let rules = &config.rules;
        Self::new(RuleRegistry::from_toggles(rules, required))
            .with_parse_issues(rules.syntax, rules.empty_values)
    }

    /// Register an additional rule.
    pub fn with_rule(mut self, rule: Box<dyn LintRule>) -> Self {
        self.registry.register(rule);
        self
    }

    /// Choose which parser issues are reported.
    ///
    /// `syntax` covers malformed lines, empty keys and invalid key formats.
    /// `empty_values` covers empty values.
    pub fn with_parse_issues(mut self, syntax: bool, empty_values: bool) -> Self {
        self.syntax_issues = syntax;
        self.empty_value_issues = empty_values;
        self
    }

    /// The rules this linter runs.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    fn keeps(&self, kind: IssueKind) -> bool {
        if kind.is_syntax() {
            self.syntax_issues
        } else if kind == IssueKind::EmptyValue {
            self.empty_value_issues
        } else {
            true
        }
    }

    /// Run the rules over an already parsed file.
    pub fn lint_outcome(&self, file: &str, outcome: ParseOutcome) -> FileLintResult {
        let rule_issues = self.registry.check(&outcome.variables, file);
        let parse_issues = outcome
            .issues
            .into_iter()
            .filter(|issue| self.keeps(issue.kind))
            .collect();

        FileLintResult {
            file: file.to_string(),
            variables: outcome.variables,
            parse_issues,
            rule_issues,
        }
    }

    /// Lint in-memory content as if it were `file`.
    pub fn lint_str(&self, content: &str, file: &str) -> FileLintResult {
        self.lint_outcome(file, EnvFileParser::parse_str(content, file))
    }

    /// Lint one file on disk.
    pub fn lint_file(&self, path: &Path) -> Result<FileLintResult> {
        self.lint_file_as(path, &path.display().to_string())
    }

    /// Lint one file on disk, reporting it under `name`.
    pub fn lint_file_as(&self, path: &Path, name: &str) -> Result<FileLintResult> {
        let outcome = EnvFileParser::parse_file_as(path, name)?;
        let result = self.lint_outcome(name, outcome);
        debug!(
            file = %result.file,
            variables = result.variables.len(),
            issues = result.issue_count(),
            "Linted file"
        );
        Ok(result)
    }

    /// Lint every file, collecting hard failures instead of stopping.
    pub fn lint<P: AsRef<Path>>(&self, files: &[P]) -> LintReport {
        let mut report = LintReport::default();

        for path in files {
            let path = path.as_ref();
            report.add(path, self.lint_file(path));
        }

        report
    }
}

impl Default for Linter {
    /// Default rule toggles with no required variables.
    fn default() -> Self {
        Self::new(RuleRegistry::from_toggles(&RuleToggles::default(), &[]))
    }
}
