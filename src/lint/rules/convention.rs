//! Naming convention checks.
//!
//! Keys are expected to be UPPER_SNAKE_CASE. Beyond the pattern itself the
//! rule flags very short or very long names, shadowed system variables,
//! generic names, redundant prefixes and abbreviations. All findings for
//! one key are collected into a single issue.

use std::sync::LazyLock;

use regex::Regex;

use crate::lint::{Issue, IssueKind, LintRule, RuleId};
use crate::parse::EnvVar;

/// Longest key accepted without a length warning.
pub const MAX_KEY_LENGTH: usize = 50;

/// Variables owned by the shell or OS.
pub const SYSTEM_VARIABLES: &[&str] = &[
    "PATH", "HOME", "USER", "SHELL", "PWD", "TERM", "LANG", "LC_ALL", "TMPDIR", "TMP", "TEMP",
    "HOSTNAME", "HOSTTYPE", "MACHTYPE",
];

/// Names too generic to convey meaning, with a tailored suggestion.
pub const GENERIC_NAMES: &[(&str, &str)] = &[
    ("CONFIG", "Be more specific (e.g., DATABASE_CONFIG, APP_CONFIG)"),
    ("SETTINGS", "Be more specific (e.g., USER_SETTINGS, APP_SETTINGS)"),
    ("DATA", "Be more specific (e.g., USER_DATA, CACHE_DATA)"),
    ("INFO", "Be more specific (e.g., USER_INFO, DEBUG_INFO)"),
    ("TEMP", "Use TMPDIR or TMP_PATH instead"),
    ("TEST", "Be more specific (e.g., TEST_DATABASE_URL)"),
];

/// Prefixes that add nothing to an environment variable name.
pub const REDUNDANT_PREFIXES: &[&str] = &["ENV_", "ENVIRONMENT_", "VAR_", "VARIABLE_"];

/// Abbreviations and their expanded forms.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("DB", "DATABASE"),
    ("PWD", "PASSWORD"),
    ("USR", "USER"),
    ("SVR", "SERVER"),
    ("CFG", "CONFIG"),
    ("STG", "STAGING"),
    ("PRD", "PRODUCTION"),
    ("DEV", "DEVELOPMENT"),
];

static VALID_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]*$").unwrap());
static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z][A-Z]").unwrap());
static LEADING_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]").unwrap());
static SPECIAL_CHAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]").unwrap());
static LOWER_THEN_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap());

// Whole-word matchers. `_` is a word character, so `DB_HOST` does not match `\bDB\b`.
static ABBREVIATION_WORDS: LazyLock<Vec<(&'static str, &'static str, Regex)>> =
    LazyLock::new(|| {
        ABBREVIATIONS
            .iter()
            .map(|(abbrev, full)| {
                let re = Regex::new(&format!(r"\b{}\b", abbrev)).unwrap();
                (*abbrev, *full, re)
            })
            .collect()
    });

/// Convert camelCase or PascalCase to snake_case.
///
/// Acronym runs are split before their last capital, so `HTTPSProxy`
/// becomes `https_proxy`.
///
/// # Example
///
/// ```
/// use envlint::lint::rules::camel_to_snake;
///
/// assert_eq!(camel_to_snake("databaseUrl"), "database_url");
/// assert_eq!(camel_to_snake("HTTPSProxy"), "https_proxy");
/// ```
pub fn camel_to_snake(name: &str) -> String {
    let split = LOWER_THEN_UPPER.replace_all(name, "${1}_${2}");
    let split = ACRONYM_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.to_lowercase()
}

/// Enforces UPPER_SNAKE_CASE and related naming practices.
pub struct ConventionRule;

impl ConventionRule {
    /// Diagnostics for a key that fails the UPPER_SNAKE_CASE pattern.
    fn pattern_findings(key: &str, out: &mut Vec<String>) {
        let upper = key.to_uppercase();
        let lower = key.to_lowercase();

        if key.contains([' ', '\t']) {
            out.push("Remove spaces and tabs from variable names".into());
            out.push("Use underscores (_) to separate words".into());
        }

        if lower == key {
            out.push("Use UPPERCASE for environment variables".into());
            out.push(format!("Try: {}", upper));
        }

        if key != upper && key != lower {
            out.push("Use consistent UPPER_SNAKE_CASE".into());
            out.push(format!("Try: {}", upper));
        }

        if key.contains('-') {
            out.push("Use underscores (_) instead of hyphens (-)".into());
            out.push(format!("Try: {}", upper.replace('-', "_")));
        }

        if CAMEL_CASE.is_match(key) {
            out.push("Convert camelCase to UPPER_SNAKE_CASE".into());
            out.push(format!("Try: {}", camel_to_snake(key).to_uppercase()));
        }

        if LEADING_DIGIT.is_match(key) {
            out.push("Variable names cannot start with numbers".into());
            out.push(format!(
                "Prefix with a descriptive word (e.g., ITEM_{})",
                key
            ));
        }

        if SPECIAL_CHAR.is_match(key) {
            out.push("Only use letters, numbers, and underscores".into());
            out.push("Remove or replace special characters".into());
        }

        if out.is_empty() {
            out.push("Use UPPER_SNAKE_CASE convention (e.g., DATABASE_URL)".into());
            out.push("Start with a letter, use only letters, numbers, and underscores".into());
        }
    }

    /// All recommendations for one key; empty when the key is fine.
    pub fn findings(key: &str) -> Vec<String> {
        let mut out = Vec::new();

        if !VALID_NAME.is_match(key) {
            Self::pattern_findings(key, &mut out);
        }

        let length = key.chars().count();
        if length == 1 {
            out.push("Avoid single-letter variable names".into());
            out.push("Use descriptive names (e.g., PORT instead of P)".into());
        }
        if length > MAX_KEY_LENGTH {
            out.push("Consider shorter, more concise variable names".into());
            out.push("Break down complex names into logical parts".into());
        }

        if SYSTEM_VARIABLES.contains(&key) {
            out.push("Avoid overriding system environment variables".into());
            out.push(format!(
                "Consider prefixing with your app name (e.g., MYAPP_{})",
                key
            ));
            out.push("This could cause unexpected behavior in scripts and tools".into());
        }

        if let Some((_, suggestion)) = GENERIC_NAMES.iter().find(|(name, _)| *name == key) {
            out.push("Variable name is too generic".into());
            out.push((*suggestion).into());
        }

        if let Some(prefix) = REDUNDANT_PREFIXES.iter().find(|p| key.starts_with(*p)) {
            out.push(format!("Remove redundant prefix '{}'", prefix));
            let stripped = &key[prefix.len()..];
            if !stripped.is_empty() {
                out.push(format!("Try: {}", stripped));
            }
        }

        for (abbrev, full, word) in ABBREVIATION_WORDS.iter() {
            if key.contains(abbrev) && !key.contains(full) && word.is_match(key) {
                out.push("Consider using full words instead of abbreviations".into());
                out.push(format!(
                    "Try: {} (instead of {})",
                    key.replace(abbrev, full),
                    abbrev
                ));
            }
        }

        out
    }
}

impl LintRule for ConventionRule {
    fn id(&self) -> RuleId {
        RuleId::new("convention")
    }

    fn name(&self) -> &str {
        "Naming Conventions"
    }

    fn description(&self) -> &str {
        "Enforces UPPER_SNAKE_CASE and descriptive variable names"
    }

    fn check(&self, variables: &[EnvVar], file: &str) -> Vec<Issue> {
        variables
            .iter()
            .filter_map(|var| {
                let findings = Self::findings(&var.key);
                (!findings.is_empty()).then(|| {
                    Issue::new(IssueKind::NamingConvention, &var.key, file)
                        .at_line(var.line)
                        .with_recommendations(findings)
                })
            })
            .collect()
    }
}
