//! Init command implementation.
//!
//! The `envlint init` command writes a commented sample `.envlint.yaml`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::cli::args::InitArgs;
use crate::config::{write_sample_config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
    color: bool,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
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

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    fn config_path(&self) -> PathBuf {
        self.project_root.join(DEFAULT_CONFIG_FILE)
    }
}

impl Command for InitCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let theme = Theme::for_color(self.color);
        let path = self.config_path();

        if path.exists() && !self.args.force {
            writeln!(
                out,
                "{}",
                theme.format_error(&format!(
                    "Configuration file already exists at {} (use --force to overwrite)",
                    DEFAULT_CONFIG_FILE
                ))
            )?;
            return Ok(CommandResult::failure(CommandResult::ISSUES_FOUND));
        }

        write_sample_config(&path)?;
        info!(path = %path.display(), "Wrote sample configuration");

        writeln!(
            out,
            "{}",
            theme.format_success(&format!("Created {}", DEFAULT_CONFIG_FILE))
        )?;
        writeln!(out)?;
        writeln!(out, "Edit it to list your required variables, then run:")?;
        writeln!(out, "  envlint lint")?;

        Ok(CommandResult::success())
    }
}
