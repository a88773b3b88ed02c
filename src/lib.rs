//! envlint - A linter for environment (.env) files.
//!
//! envlint parses `KEY=VALUE` files, reports structural problems and rule
//! violations, and can scan a codebase to discover which environment
//! variables it depends on.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.envlint.yaml` loading
//! - [`discovery`] - Locating `.env` files to lint
//! - [`error`] - Error types and result aliases
//! - [`lint`] - Issues, rules, the linter and output formatters
//! - [`parse`] - The `.env` parser
//! - [`scan`] - Project scanning for variable usage
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```
//! use envlint::config::LintConfig;
//! use envlint::lint::{IssueKind, Linter};
//!
//! let mut config = LintConfig::default();
//! config.required_vars.push("DATABASE_URL".to_string());
//!
//! let linter = Linter::from_config(&config, &config.required_vars);
//! let result = linter.lint_str("PORT=8080\nPORT=3000\n", ".env");
//!
//! let kinds: Vec<_> = result.all_issues().iter().map(|i| i.kind).collect();
//! assert_eq!(kinds, vec![IssueKind::Duplicate, IssueKind::MissingRequired]);
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod lint;
pub mod parse;
pub mod scan;
pub mod ui;

pub use error::{EnvLintError, Result};
