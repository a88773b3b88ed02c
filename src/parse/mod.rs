//! `.env` file parsing.
//!
//! - [`EnvVar`] - One parsed `KEY=VALUE` assignment with its source line
//! - [`EnvFileParser`] - Line-oriented parser with error recovery
//! - [`ParseOutcome`] - Variables plus the structural issues found while parsing
//!
//! # Example
//!
//! ```
//! use envlint::parse::EnvFileParser;
//! use envlint::lint::IssueKind;
//!
//! let outcome = EnvFileParser::parse_str("PORT=8080\nNOT AN ASSIGNMENT\n", ".env");
//! assert_eq!(outcome.variables.len(), 1);
//! assert_eq!(outcome.issues[0].kind, IssueKind::MalformedLine);
//! ```

pub mod parser;
pub mod variable;

pub use parser::{EnvFileParser, ParseOutcome};
pub use variable::EnvVar;
