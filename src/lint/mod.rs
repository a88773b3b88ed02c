//! `.env` file linting.
//!
//! This module provides rule-based validation of parsed `.env` files.
//!
//! # Overview
//!
//! The lint system consists of:
//!
//! - **Issues** - Findings with a kind, location and recommendations ([`Issue`])
//! - **Rules** - Individual checks over one file's variables ([`LintRule`] trait)
//! - **Registry** - Ordered collection of enabled rules ([`RuleRegistry`])
//! - **Linter** - Drives parsing and rules across files ([`Linter`])
//! - **Output** - Pretty, JSON and GitHub Actions formatters ([`output`])
//! - **Fixes** - Safe rewrites of env files ([`fix`])
//!
//! # Example
//!
//! ```
//! use envlint::lint::{IssueKind, RuleId, RuleRegistry, Severity};
//!
//! let registry = RuleRegistry::with_builtins(&[]);
//! assert!(registry.get(&RuleId::new("duplicate")).is_some());
//!
//! assert!(Severity::Warning < Severity::Error);
//! assert_eq!(IssueKind::EmptyValue.severity(), Severity::Warning);
//! ```

pub mod fix;
pub mod issue;
pub mod linter;
pub mod output;
pub mod registry;
pub mod rule;
pub mod rules;

pub use fix::{FixAction, FixEngine, FixPlan, LineFix};
pub use issue::{Issue, IssueKind};
pub use linter::{FileLintResult, LintFailure, LintReport, Linter};
pub use output::{GithubFormatter, HumanFormatter, JsonFormatter, LintFormatter, OutputFormat};
pub use registry::RuleRegistry;
pub use rule::{FnRule, LintRule, RuleId, Severity};
pub use rules::{ConventionRule, DuplicateRule, MissingRule, SecurityRule};
