//! Usage pattern catalog.
//!
//! A [`PatternCatalog`] is an immutable list of [`PatternDefinition`]s handed
//! to a scanner at construction. Every definition's regex has exactly one
//! capture group, which yields the candidate variable name on match.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{EnvLintError, Result};

/// One known way of referencing an environment variable in source code.
#[derive(Debug, Clone)]
pub struct PatternDefinition {
    /// Display name, e.g. `"Go os.Getenv"`.
    pub name: String,
    /// Compiled regex with a single capture group.
    pub regex: Regex,
    /// What the pattern matches.
    pub description: String,
    /// Source language tag, e.g. `"go"`.
    pub language: String,
}

impl PatternDefinition {
    /// Compile a pattern definition.
    ///
    /// Fails with [`EnvLintError::InvalidPattern`] when `pattern` does not
    /// compile or does not have exactly one capture group.
    ///
    /// # Example
    ///
    /// ```
    /// use envlint::scan::PatternDefinition;
    ///
    /// let ok = PatternDefinition::new("dotenv", r"env\('([A-Z_]+)'\)", "env() helper", "php");
    /// assert!(ok.is_ok());
    ///
    /// let no_group = PatternDefinition::new("bad", r"env\('[A-Z_]+'\)", "", "php");
    /// assert!(no_group.is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        description: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| EnvLintError::InvalidPattern {
            name: name.clone(),
            message: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != 1 {
            return Err(EnvLintError::InvalidPattern {
                name,
                message: format!("expected exactly one capture group, found {}", groups),
            });
        }

        Ok(Self {
            name,
            regex,
            description: description.into(),
            language: language.into(),
        })
    }

    /// Candidate variable names matched on `line`, in match order.
    pub fn candidates<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Built-in patterns as (name, regex, description, language).
const BUILTIN_PATTERNS: &[(&str, &str, &str, &str)] = &[
    (
        "Go os.Getenv",
        r#"os\.Getenv\(["']([A-Z][A-Z0-9_]*)["']\)"#,
        "Go os.Getenv() calls",
        "go",
    ),
    (
        "Node.js process.env",
        r"process\.env\.([A-Z][A-Z0-9_]*)",
        "Node.js process.env access",
        "javascript",
    ),
    (
        "Python os.environ",
        r#"os\.environ\[["']([A-Z][A-Z0-9_]*)["']\]"#,
        "Python os.environ access",
        "python",
    ),
    (
        "Python os.getenv",
        r#"os\.getenv\(["']([A-Z][A-Z0-9_]*)["']\)"#,
        "Python os.getenv() calls",
        "python",
    ),
    (
        "Shell variable expansion",
        r"\$\{([A-Z][A-Z0-9_]*)\}",
        "Shell ${VAR} expansion",
        "shell",
    ),
    (
        "Shell variable simple",
        r"\$([A-Z][A-Z0-9_]{2,})",
        "Shell $VAR expansion",
        "shell",
    ),
    (
        "Docker ENV",
        r"ENV\s+([A-Z][A-Z0-9_]*)",
        "Dockerfile ENV declarations",
        "docker",
    ),
    (
        "Java System.getenv",
        r#"System\.getenv\(["']([A-Z][A-Z0-9_]*)["']\)"#,
        "Java System.getenv() calls",
        "java",
    ),
    (
        "C# Environment.GetEnvironmentVariable",
        r#"Environment\.GetEnvironmentVariable\(["']([A-Z][A-Z0-9_]*)["']\)"#,
        "C# Environment.GetEnvironmentVariable() calls",
        "csharp",
    ),
    (
        "Ruby ENV",
        r#"ENV\[["']([A-Z][A-Z0-9_]*)["']\]"#,
        "Ruby ENV hash access",
        "ruby",
    ),
    (
        "PHP getenv",
        r#"getenv\(["']([A-Z][A-Z0-9_]*)["']\)"#,
        "PHP getenv() calls",
        "php",
    ),
    (
        "PHP $_ENV",
        r#"\$_ENV\[["']([A-Z][A-Z0-9_]*)["']\]"#,
        "PHP $_ENV superglobal access",
        "php",
    ),
    (
        "YAML environment reference",
        r"\$\{([A-Z][A-Z0-9_]*)\}",
        "YAML environment variable references",
        "yaml",
    ),
    (
        "Generic string literal",
        r#"["']([A-Z][A-Z0-9_]{3,})["']"#,
        "Environment variable names in strings (lower confidence)",
        "generic",
    ),
];

static BUILTIN: LazyLock<Vec<PatternDefinition>> = LazyLock::new(|| {
    BUILTIN_PATTERNS
        .iter()
        .map(|(name, pattern, description, language)| {
            PatternDefinition::new(*name, pattern, *description, *language).unwrap()
        })
        .collect()
});

/// An ordered, immutable set of usage patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<PatternDefinition>,
}

impl PatternCatalog {
    /// A catalog holding exactly `patterns`.
    pub fn new(patterns: Vec<PatternDefinition>) -> Self {
        Self { patterns }
    }

    /// The built-in catalog covering common languages and config formats.
    pub fn builtin() -> Self {
        Self::new(BUILTIN.clone())
    }

    /// This catalog with `extra` appended.
    pub fn extended(mut self, extra: impl IntoIterator<Item = PatternDefinition>) -> Self {
        self.patterns.extend(extra);
        self
    }

    /// Iterate over patterns in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternDefinition> {
        self.patterns.iter()
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&PatternDefinition> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
