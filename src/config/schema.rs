//! Configuration schema definitions for envlint.
//!
//! This module contains the struct definitions that map to the YAML
//! configuration file format. Every field has a default, so a partial
//! file only overrides what it names.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scan::{PatternDefinition, Scanner};

/// Root configuration structure for `.envlint.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Variables every linted file must define.
    pub required_vars: Vec<String>,

    /// Rule enable flags.
    pub rules: RuleToggles,

    /// Output settings.
    pub output: OutputConfig,

    /// Project scan settings.
    pub scan: ScanConfig,
}

/// Which checks run.
///
/// `duplicate`, `missing`, `security` and `convention` enable rules.
/// `syntax` and `empty_values` select which parser issues are reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleToggles {
    pub duplicate: bool,
    pub missing: bool,
    pub security: bool,
    pub convention: bool,
    pub syntax: bool,
    pub empty_values: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            duplicate: true,
            missing: true,
            security: false,
            convention: false,
            syntax: true,
            empty_values: true,
        }
    }
}

impl RuleToggles {
    /// Every check enabled.
    pub fn all() -> Self {
        Self {
            duplicate: true,
            missing: true,
            security: true,
            convention: true,
            syntax: true,
            empty_values: true,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: pretty, json, github.
    pub format: String,

    /// Enable colored output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
            color: true,
        }
    }
}

/// Project scan settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extra directory substrings to skip, added to the defaults.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_paths: Vec<String>,

    /// Replacement extension allow-list. Empty keeps the defaults.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include_extensions: Vec<String>,

    /// Extra usage patterns, appended to the built-in catalog.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<CustomPattern>,
}

/// A user-defined usage pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPattern {
    pub name: String,

    /// Regex with exactly one capture group for the variable name.
    pub regex: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "custom".to_string()
}

impl CustomPattern {
    /// Compile into a [`PatternDefinition`].
    pub fn compile(&self) -> Result<PatternDefinition> {
        PatternDefinition::new(
            self.name.clone(),
            &self.regex,
            self.description.clone(),
            self.language.clone(),
        )
    }
}

impl ScanConfig {
    /// Compile every custom pattern, failing on the first invalid one.
    pub fn compiled_patterns(&self) -> Result<Vec<PatternDefinition>> {
        self.patterns.iter().map(CustomPattern::compile).collect()
    }

    /// Build a [`Scanner`] with these settings applied to the defaults.
    pub fn scanner(&self) -> Result<Scanner> {
        let mut scanner = Scanner::new()
            .with_custom_patterns(self.compiled_patterns()?)
            .with_exclude_paths(self.exclude_paths.iter().cloned());
        if !self.include_extensions.is_empty() {
            scanner = scanner.with_include_extensions(self.include_extensions.iter().cloned());
        }
        Ok(scanner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = LintConfig::default();

        assert!(config.required_vars.is_empty());
        assert!(config.rules.duplicate);
        assert!(config.rules.missing);
        assert!(!config.rules.security);
        assert!(!config.rules.convention);
        assert!(config.rules.syntax);
        assert!(config.rules.empty_values);
        assert_eq!(config.output.format, "pretty");
        assert!(config.output.color);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "rules:\n  security: true\n";
        let config: LintConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(config.rules.security);
        assert!(config.rules.duplicate);
        assert_eq!(config.output.format, "pretty");
    }

    #[test]
    fn full_yaml_parses() {
        let yaml = r#"
required_vars:
  - DATABASE_URL
  - PORT
rules:
  duplicate: false
  convention: true
output:
  format: json
  color: false
scan:
  exclude_paths: [fixtures]
  include_extensions: [".js"]
  patterns:
    - name: config helper
      regex: 'config\("([A-Z_]+)"\)'
"#;
        let config: LintConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.required_vars, vec!["DATABASE_URL", "PORT"]);
        assert!(!config.rules.duplicate);
        assert!(config.rules.convention);
        assert_eq!(config.output.format, "json");
        assert!(!config.output.color);
        assert_eq!(config.scan.exclude_paths, vec!["fixtures"]);
        assert_eq!(config.scan.patterns[0].language, "custom");
        assert_eq!(config.scan.compiled_patterns().unwrap().len(), 1);
    }

    #[test]
    fn invalid_custom_pattern_fails_to_compile() {
        let scan = ScanConfig {
            patterns: vec![CustomPattern {
                name: "no group".to_string(),
                regex: "ENV_[A-Z]+".to_string(),
                description: String::new(),
                language: "custom".to_string(),
            }],
            ..Default::default()
        };

        assert!(scan.compiled_patterns().is_err());
    }

    #[test]
    fn scanner_applies_settings() {
        let scan = ScanConfig {
            exclude_paths: vec!["fixtures".to_string()],
            include_extensions: vec![".rb".to_string()],
            patterns: vec![CustomPattern {
                name: "settings".to_string(),
                regex: r#"settings\.get\("([A-Z_]+)"\)"#.to_string(),
                description: String::new(),
                language: "custom".to_string(),
            }],
        };

        let scanner = scan.scanner().unwrap();

        assert!(scanner.exclude_paths().iter().any(|p| p == "fixtures"));
        assert!(scanner.exclude_paths().iter().any(|p| p == "node_modules"));
        assert_eq!(scanner.include_extensions(), [".rb".to_string()]);
        assert!(scanner.catalog().get("settings").is_some());
    }

    #[test]
    fn empty_extension_list_keeps_defaults() {
        let scanner = ScanConfig::default().scanner().unwrap();
        assert!(scanner.include_extensions().iter().any(|e| e == ".py"));
    }

    #[test]
    fn all_toggles_enabled() {
        let all = RuleToggles::all();
        assert!(all.security && all.convention && all.duplicate && all.missing);
    }
}
