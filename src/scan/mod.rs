//! Project scanning for environment variable usage.
//!
//! - [`PatternCatalog`] - Known ways source code references variables
//! - [`Scanner`] - Walks a tree and records [`UsageRecord`]s
//! - [`confidence()`] - Scores a single match
//! - [`ScanResult`] - Collected usages plus the required-variable aggregator
//!
//! # Example
//!
//! ```
//! use envlint::scan::Scanner;
//!
//! let result = Scanner::new().scan_content("port = os.getenv('PORT')\n", "app.py");
//! assert_eq!(result.required_variables(0.7, 1), vec!["PORT"]);
//! ```

pub mod aggregate;
pub mod confidence;
pub mod pattern;
pub mod scanner;

pub use aggregate::{ScanResult, UsageRecord};
pub use confidence::confidence;
pub use pattern::{PatternCatalog, PatternDefinition};
pub use scanner::{ScanError, Scanner, DEFAULT_EXCLUDE_PATHS, DEFAULT_INCLUDE_EXTENSIONS};
