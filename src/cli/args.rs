//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// envlint - A linter for environment (.env) files.
#[derive(Debug, Parser)]
#[command(name = "envlint")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Lint environment files for common issues
    Lint(LintArgs),

    /// Quick syntax check for environment files
    Check(CheckArgs),

    /// Auto-fix safe issues in environment files
    Fix(FixArgs),

    /// Scan a project for environment variable usage
    Scan(ScanArgs),

    /// Create a sample configuration file
    Init(InitArgs),
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, clap::Args)]
pub struct LintArgs {
    /// Files to lint (default: .env, .env.local, .env.development, .env.production)
    pub files: Vec<PathBuf>,

    /// Recursively search directories for .env files
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format: pretty, json, github (overrides config)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Suppress output when no issues are found
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Discover required variables by scanning the project
    #[arg(long)]
    pub auto_discover: bool,

    /// Path to scan for auto-discovery
    #[arg(long, default_value = ".")]
    pub scan_path: PathBuf,

    /// Minimum confidence for auto-discovered variables (0.0-1.0)
    #[arg(long, default_value_t = 0.7)]
    pub min_confidence: f64,

    /// Minimum usages for auto-discovered variables
    #[arg(long, default_value_t = 1)]
    pub min_usages: usize,
}

impl Default for LintArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            recursive: false,
            format: None,
            quiet: false,
            config: None,
            auto_discover: false,
            scan_path: PathBuf::from("."),
            min_confidence: 0.7,
            min_usages: 1,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the `fix` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FixArgs {
    /// Files to fix (default: .env, .env.local, .env.development, .env.production)
    pub files: Vec<PathBuf>,

    /// Recursively search directories for .env files
    #[arg(short, long)]
    pub recursive: bool,

    /// Preview changes without writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Copy each file to <file>.backup before rewriting it
    #[arg(long)]
    pub backup: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Minimum average confidence for a variable to be reported (0.0-1.0)
    #[arg(long, default_value_t = 0.7)]
    pub min_confidence: f64,

    /// Minimum number of usages for a variable to be reported
    #[arg(long, default_value_t = 1)]
    pub min_usages: usize,

    /// Output format: pretty, json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Show every usage location
    #[arg(long)]
    pub show_usages: bool,

    /// Additional directories to skip (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            min_confidence: 0.7,
            min_usages: 1,
            format: "pretty".to_string(),
            show_usages: false,
            exclude: Vec::new(),
            config: None,
        }
    }
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}
