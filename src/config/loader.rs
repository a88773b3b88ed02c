//! Configuration file discovery and loading.
//!
//! A project has at most one config file. It is looked up in the working
//! directory under the names in [`CONFIG_FILE_NAMES`], first match wins.
//! Without a file every setting takes its default.

use crate::config::schema::LintConfig;
use crate::error::{EnvLintError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".envlint.yaml",
    ".envlint.yml",
    "envlint.yaml",
    "envlint.yml",
];

/// Name used by `init` when writing a new config.
pub const DEFAULT_CONFIG_FILE: &str = ".envlint.yaml";

/// Commented sample configuration written by `init`.
pub const SAMPLE_CONFIG: &str = r#"# envlint configuration file

# Required environment variables that must be present
required_vars:
  - DATABASE_URL
  - API_KEY
  - PORT

# Rule configuration
rules:
  duplicate: true      # Check for duplicate variable definitions
  missing: true        # Check for missing required variables
  security: false      # Detect secrets committed in plaintext
  convention: false    # Enforce UPPER_SNAKE_CASE naming
  syntax: true         # Validate .env file syntax
  empty_values: true   # Warn about empty variable values

# Output configuration
output:
  format: "pretty"     # Output format: pretty, json, github
  color: true          # Enable colored output

# Project scan configuration (used by `scan` and `lint --auto-discover`)
scan:
  exclude_paths: []         # Extra directories to skip
  include_extensions: []    # Replaces the default extension list when set
  patterns: []              # Extra patterns, each with name, regex, description, language
"#;

/// Find the config file in `dir`, if any.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<LintConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            EnvLintError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            EnvLintError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`LintConfig`].
///
/// An empty or comment-only document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<LintConfig> {
    let parse_error = |e: serde_yaml::Error| EnvLintError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    };

    let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(parse_error)?;
    if value.is_null() {
        return Ok(LintConfig::default());
    }
    serde_yaml::from_value(value).map_err(parse_error)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// config is discovered in `project_root`, falling back to the defaults.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<LintConfig> {
    let path = match config_override {
        Some(path) => path.to_path_buf(),
        None => match discover_config(project_root) {
            Some(path) => path,
            None => {
                debug!(root = %project_root.display(), "No config file found, using defaults");
                return Ok(LintConfig::default());
            }
        },
    };

    debug!(path = %path.display(), "Loading config");
    load_config_file(&path)
}

/// Write [`SAMPLE_CONFIG`] to `path`, creating parent directories.
pub fn write_sample_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, SAMPLE_CONFIG)?;
    Ok(())
}
