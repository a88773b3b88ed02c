//! Rule registry for managing lint rules.
//!
//! The [`RuleRegistry`] stores rules in registration order and evaluates
//! them one after another against a file's variables.

use super::issue::Issue;
use super::rule::{LintRule, RuleId};
use super::rules::{ConventionRule, DuplicateRule, MissingRule, SecurityRule};
use crate::config::RuleToggles;
use crate::parse::EnvVar;

/// Ordered registry of lint rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn LintRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with every built-in rule enabled.
    ///
    /// The missing-variable rule is registered only when `required` is
    /// non-empty.
    pub fn with_builtins(required: &[String]) -> Self {
        Self::from_toggles(&RuleToggles::all(), required)
    }

    /// Create a registry from configuration flags.
    ///
    /// Rules are registered in the order duplicate, missing, security,
    /// convention. The parser-level `syntax`/`empty_values` flags are not
    /// rules and are ignored here.
    pub fn from_toggles(toggles: &RuleToggles, required: &[String]) -> Self {
        let mut registry = Self::new();
        if toggles.duplicate {
            registry.register(Box::new(DuplicateRule));
        }
        if toggles.missing && !required.is_empty() {
            registry.register(Box::new(MissingRule::new(required.to_vec())));
        }
        if toggles.security {
            registry.register(Box::new(SecurityRule));
        }
        if toggles.convention {
            registry.register(Box::new(ConventionRule));
        }
        registry
    }

    /// Register a lint rule.
    ///
    /// A rule whose ID is already registered replaces the earlier one in
    /// place.
    pub fn register(&mut self, rule: Box<dyn LintRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(pos) => self.rules[pos] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn LintRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn LintRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Run every rule against one file's variables, concatenating issues.
    pub fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in self.iter() {
            issues.extend(rule.check(variables, file));
        }
        issues
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::IssueKind;

    struct MockRule {
        id: RuleId,
        subject: &'static str,
    }

    impl LintRule for MockRule {
        fn id(&self) -> RuleId {
            self.id.clone()
        }
        fn name(&self) -> &str {
            "Mock Rule"
        }
        fn description(&self) -> &str {
            "A mock rule for testing"
        }
        fn check(&self, _variables: &[EnvVar], file: &str) -> Vec<Issue> {
            vec![Issue::new(IssueKind::NamingConvention, self.subject, file)]
        }
    }

    fn mock(id: &str, subject: &'static str) -> Box<dyn LintRule> {
        Box::new(MockRule {
            id: RuleId::new(id),
            subject,
        })
    }

    #[test]
    fn registry_new_is_empty() {
        let registry = RuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_register_and_get() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("mock", "A"));

        assert!(!registry.is_empty());
        assert!(registry.get(&RuleId::new("mock")).is_some());
        assert!(registry.get(&RuleId::new("unknown")).is_none());
    }

    #[test]
    fn registry_keeps_registration_order() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("rule1", "first"));
        registry.register(mock("rule2", "second"));

        let issues = registry.check(&[], ".env");
        let subjects: Vec<_> = issues.iter().map(|i| i.subject.as_str()).collect();
        assert_eq!(subjects, vec!["first", "second"]);
    }

    #[test]
    fn registering_same_id_replaces_in_place() {
        let mut registry = RuleRegistry::new();
        registry.register(mock("a", "old"));
        registry.register(mock("b", "b"));
        registry.register(mock("a", "new"));

        assert_eq!(registry.len(), 2);
        let issues = registry.check(&[], ".env");
        assert_eq!(issues[0].subject, "new");
    }

    #[test]
    fn registry_default_is_empty() {
        let registry = RuleRegistry::default();
        assert!(registry.is_empty());
    }

    #[test]
    fn with_builtins_has_all_rules() {
        let registry = RuleRegistry::with_builtins(&["API_KEY".to_string()]);

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["duplicate", "missing", "security", "convention"]);
    }

    #[test]
    fn missing_rule_skipped_without_required_vars() {
        let registry = RuleRegistry::with_builtins(&[]);

        assert!(registry.get(&RuleId::new("missing")).is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn default_toggles_enable_duplicate_and_missing_only() {
        let registry =
            RuleRegistry::from_toggles(&RuleToggles::default(), &["PORT".to_string()]);

        let ids: Vec<_> = registry.iter().map(|r| r.id().0).collect();
        assert_eq!(ids, vec!["duplicate", "missing"]);
    }
}
