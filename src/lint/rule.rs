//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`FnRule`] - Adapter turning a plain function or closure into a rule
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for issues (Warning, Error)

use super::issue::Issue;
use crate::parse::EnvVar;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Worth fixing, does not indicate a broken file.
    Warning,
    /// The file is broken or unsafe as committed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A lint rule evaluated against one file's full variable list.
///
/// Rules are pure: they see the variables of a single file (never merged
/// across files) and return zero or more issues. Several rules may report
/// on the same line; their issues are concatenated, never deduplicated.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Check the variables of `file` and return any issues.
    fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue>;
}

/// A rule backed by a function or closure.
///
/// # Example
///
/// ```
/// use envlint::lint::{FnRule, Issue, IssueKind, LintRule};
/// use envlint::parse::EnvVar;
///
/// let rule = FnRule::new("no-debug", |vars: &[EnvVar], file: &str| {
///     vars.iter()
///         .filter(|v| v.key == "DEBUG")
///         .map(|v| Issue::new(IssueKind::NamingConvention, &v.key, file).at_line(v.line))
///         .collect()
/// });
///
/// let issues = rule.check(&[EnvVar::new("DEBUG", "1", 2)], ".env");
/// assert_eq!(issues.len(), 1);
/// ```
pub struct FnRule<F> {
    id: String,
    check: F,
}

impl<F> FnRule<F>
where
    F: Fn(&[EnvVar], &str) -> Vec<Issue> + Send + Sync,
{
    /// Wrap `check` as a rule named `id`.
    pub fn new(id: impl Into<String>, check: F) -> Self {
        Self {
            id: id.into(),
            check,
        }
    }
}

impl<F> LintRule for FnRule<F>
where
    F: Fn(&[EnvVar], &str) -> Vec<Issue> + Send + Sync,
{
    fn id(&self) -> RuleId {
        RuleId::new(self.id.clone())
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn description(&self) -> &str {
        "Custom rule"
    }

    fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue> {
        (self.check)(variables, file)
    }
}
