//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `out` - Destination for the command's report
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Exit code when lint issues or check failures were found.
    pub const ISSUES_FOUND: i32 = 1;

    /// Exit code when a file or the configuration could not be processed.
    pub const HARD_ERROR: i32 = 2;

    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    color: bool,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    ///
    /// Output is uncolored until [`with_color`](Self::with_color) says otherwise.
    pub fn new(project_root: PathBuf) -> Self {
        Self {
            project_root,
            color: false,
        }
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Lint(args)) => {
                let cmd = super::lint::LintCommand::new(&self.project_root, args.clone())
                    .with_color(self.color);
                cmd.execute(out)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&self.project_root, args.clone())
                    .with_color(self.color);
                cmd.execute(out)
            }
            Some(Commands::Fix(args)) => {
                let cmd = super::fix::FixCommand::new(&self.project_root, args.clone())
                    .with_color(self.color);
                cmd.execute(out)
            }
            Some(Commands::Scan(args)) => {
                let cmd = super::scan::ScanCommand::new(&self.project_root, args.clone())
                    .with_color(self.color);
                cmd.execute(out)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(&self.project_root, args.clone())
                    .with_color(self.color);
                cmd.execute(out)
            }
            None => {
                writeln!(out, "envlint - lint your .env files")?;
                writeln!(out)?;
                writeln!(out, "Run `envlint --help` to see available commands.")?;
                Ok(CommandResult::success())
            }
        }
    }

    /// Dispatch, flush `out` and settle on the process exit code.
    ///
    /// A command error or a failed flush both exit with
    /// [`CommandResult::HARD_ERROR`].
    pub fn run(&self, cli: &Cli, out: &mut dyn Write) -> i32 {
        let code = match self.dispatch(cli, out) {
            Ok(result) => result.exit_code,
            Err(e) => {
                eprintln!("Error: {}", e);
                CommandResult::HARD_ERROR
            }
        };

        match out.flush() {
            Ok(()) => code,
            Err(error) => {
                warn!(%error, "Failed to flush output");
                CommandResult::HARD_ERROR
            }
        }
    }
}

/// Render `path` relative to `root` when it lies below it.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
