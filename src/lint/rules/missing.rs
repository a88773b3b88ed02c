//! Required variable presence check.

use std::collections::HashSet;

use crate::lint::{Issue, IssueKind, LintRule, RuleId};
use crate::parse::EnvVar;

/// Flags required variables absent from a file.
///
/// Missing variables have no line, so issues carry no location.
pub struct MissingRule {
    required: Vec<String>,
}

impl MissingRule {
    /// Create the rule for a list of required names.
    pub fn new(required: Vec<String>) -> Self {
        Self { required }
    }

    /// The names this rule requires.
    pub fn required(&self) -> &[String] {
        &self.required
    }
}

impl LintRule for MissingRule {
    fn id(&self) -> RuleId {
        RuleId::new("missing")
    }

    fn name(&self) -> &str {
        "Missing Required Variables"
    }

    fn description(&self) -> &str {
        "Checks that every required variable is defined"
    }

    fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue> {
        let defined: HashSet<&str> = variables.iter().map(|v| v.key.as_str()).collect();

        self.required
            .iter()
            .filter(|name| !defined.contains(name.as_str()))
            .map(|name| {
                Issue::new(IssueKind::MissingRequired, name, file).with_recommendations([
                    "Add the missing variable to your .env file",
                    "Check your configuration for required variables",
                    "Ensure the variable name is spelled correctly",
                    "Consider if this should be optional instead",
                ])
            })
            .collect()
    }
}
