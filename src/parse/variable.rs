//! Parsed variable records.

use serde::Serialize;

/// A single `KEY=VALUE` assignment read from an env file.
///
/// The key is never empty. Several records may share a key; spotting
/// duplicates is the job of [`DuplicateRule`](crate::lint::DuplicateRule).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvVar {
    /// Variable name, trimmed.
    pub key: String,
    /// Variable value, trimmed. May be empty.
    pub value: String,
    /// 1-indexed physical line the assignment was read from.
    pub line: usize,
}

impl EnvVar {
    /// Create a new variable record.
    pub fn new(key: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            line,
        }
    }
}
