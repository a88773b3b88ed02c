//! Plaintext secret detection.
//!
//! Two independent signals are checked for every non-empty variable: a key
//! whose name suggests a secret, and a value shaped like a credential.
//! Values containing a known placeholder word are exempt.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Issue, IssueKind, LintRule, RuleId};
use crate::parse::EnvVar;

/// Key name suffixes that suggest sensitive content.
const SECRET_KEY_PATTERNS: &[&str] = &[
    r"(?i)(password|pwd|pass)$",
    r"(?i)(secret|key|token)$",
    r"(?i)(private|priv)_key$",
    r"(?i)api_(key|secret|token)$",
    r"(?i)(auth|oauth)_(key|secret|token)$",
    r"(?i)(access|refresh)_token$",
    r"(?i)jwt_(secret|key)$",
    r"(?i)(db|database)_(password|pass|pwd)$",
    r"(?i)(smtp|email)_(password|pass|pwd)$",
    r"(?i)(aws|gcp|azure)_(secret|key)$",
];

/// Value shapes typical of real credentials, as (description, regex).
// Provider prefixes come first so they win over the generic shapes.
const SECRET_VALUE_PATTERNS: &[(&str, &str)] = &[
    ("AWS access key", r"^AKIA[0-9A-Z]{16}$"),
    ("Google API key", r"^AIza[0-9A-Za-z_-]{35}$"),
    ("JWT-like token", r"^[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+$"),
    ("long alphanumeric key", r"^[A-Za-z0-9]{32,}$"),
    ("base64-encoded data", r"^[A-Za-z0-9+/]{20,}={0,2}$"),
    ("hex-encoded key", r"^[a-fA-F0-9]{16,}$"),
];

/// Words whose presence marks a value as a harmless placeholder.
pub const SAFE_PLACEHOLDERS: &[&str] = &[
    "changeme",
    "placeholder",
    "your_key_here",
    "your_secret_here",
    "example",
    "sample",
    "dummy",
    "test",
    "localhost",
    "127.0.0.1",
    "true",
    "false",
    "development",
    "production",
    "staging",
];

static KEY_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SECRET_KEY_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static VALUE_REGEXES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SECRET_VALUE_PATTERNS
        .iter()
        .map(|(name, p)| (*name, Regex::new(p).unwrap()))
        .collect()
});

/// Whether a key name suggests it holds a secret.
pub fn is_secret_key(key: &str) -> bool {
    KEY_REGEXES.iter().any(|re| re.is_match(key))
}

/// Describe the credential shape `value` matches, if any.
///
/// Hex keys must also have an even number of digits.
pub fn secret_value_shape(value: &str) -> Option<&'static str> {
    VALUE_REGEXES
        .iter()
        .find(|(name, re)| {
            re.is_match(value) && (*name != "hex-encoded key" || value.len() % 2 == 0)
        })
        .map(|(name, _)| *name)
}

/// Whether a value contains one of the [`SAFE_PLACEHOLDERS`].
pub fn is_safe_placeholder(value: &str) -> bool {
    let lower = value.to_lowercase();
    SAFE_PLACEHOLDERS.iter().any(|p| lower.contains(p))
}

/// Flags variables that look like secrets stored in plaintext.
pub struct SecurityRule;

impl SecurityRule {
    fn recommendations(secret_key: bool, shape: Option<&str>) -> Vec<String> {
        let mut recommendations = Vec::new();
        match shape {
            Some(shape) => recommendations.push(format!(
                "Value appears to be a secret or API key ({})",
                shape
            )),
            None if secret_key => recommendations
                .push("Variable name suggests it may contain sensitive data".to_string()),
            None => {}
        }
        recommendations.extend(
            [
                "Consider using a secret management system (e.g., HashiCorp Vault, AWS Secrets Manager)",
                "Use placeholder values in committed files (e.g., 'your_api_key_here')",
                "Add this file to .gitignore if it contains real secrets",
                "Use environment-specific files (.env.local) for sensitive data",
            ]
            .map(String::from),
        );
        recommendations
    }
}

impl LintRule for SecurityRule {
    fn id(&self) -> RuleId {
        RuleId::new("security")
    }

    fn name(&self) -> &str {
        "Plaintext Secrets"
    }

    fn description(&self) -> &str {
        "Detects values that look like real secrets committed in plaintext"
    }

    fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue> {
        let mut issues = Vec::new();

        for var in variables {
            if var.value.is_empty() || is_safe_placeholder(&var.value) {
                continue;
            }

            let secret_key = is_secret_key(&var.key);
            let shape = secret_value_shape(&var.value);
            if !secret_key && shape.is_none() {
                continue;
            }

            issues.push(
                Issue::new(IssueKind::PotentialSecret, &var.key, file)
                    .at_line(var.line)
                    .with_recommendations(Self::recommendations(secret_key, shape)),
            );
        }

        issues
    }
}
