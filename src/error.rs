//! Error types for envlint operations.
//!
//! This module defines [`EnvLintError`], the error type for hard failures,
//! and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Problems found *inside* a file (malformed lines, naming violations,
//!   duplicates, ...) are never errors; they are reported as
//!   [`Issue`](crate::lint::Issue)s.
//! - `EnvLintError` is reserved for failures that stop processing of one
//!   file or one command (unreadable file, broken configuration).
//! - Per-file failures during a project scan are collected as
//!   [`ScanError`](crate::scan::ScanError)s and never abort the walk.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envlint operations.
#[derive(Debug, Error)]
pub enum EnvLintError {
    /// A target file could not be opened or read.
    #[error("Cannot read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixed file or its backup could not be written.
    #[error("Cannot write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A usage pattern is not a valid single-capture regular expression.
    #[error("Invalid pattern '{name}': {message}")]
    InvalidPattern { name: String, message: String },

    /// A directory was given where a file was expected.
    #[error("{path} is a directory (use --recursive to search directories)")]
    NotAFile { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for envlint operations.
pub type Result<T> = std::result::Result<T, EnvLintError>;
