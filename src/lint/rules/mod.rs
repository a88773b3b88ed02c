//! Built-in lint rules.
//!
//! This module contains the rules that ship with envlint.

pub mod convention;
pub mod duplicate;
pub mod missing;
pub mod security;

pub use convention::{camel_to_snake, ConventionRule};
pub use duplicate::DuplicateRule;
pub use missing::MissingRule;
pub use security::SecurityRule;
