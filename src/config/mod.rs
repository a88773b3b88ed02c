//! Configuration loading.
//!
//! - [`LintConfig`] - Typed `.envlint.yaml` contents with defaults
//! - [`load_config`] - Discovery and loading
//! - [`write_sample_config`] - Used by `envlint init`
//!
//! # Example
//!
//! ```
//! use envlint::config::{parse_config, LintConfig};
//! use std::path::Path;
//!
//! let config = parse_config("rules:\n  security: true\n", Path::new(".envlint.yaml")).unwrap();
//! assert!(config.rules.security);
//! assert!(config.rules.duplicate);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover_config, load_config, load_config_file, parse_config, write_sample_config,
    CONFIG_FILE_NAMES, DEFAULT_CONFIG_FILE, SAMPLE_CONFIG,
};
pub use schema::{CustomPattern, LintConfig, OutputConfig, RuleToggles, ScanConfig};
