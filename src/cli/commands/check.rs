//! Check command implementation.
//!
//! The `envlint check` command only validates syntax: it reports whether
//! each file parses without malformed lines or empty keys. No rules run.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::lint::IssueKind;
use crate::parse::EnvFileParser;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    color: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
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

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    /// Check one file, returning whether it passed.
    fn check_file(&self, file: &Path, theme: &Theme, out: &mut dyn Write) -> Result<bool> {
        let name = file.display();
        let path = self.project_root.join(file);

        if !path.exists() {
            writeln!(out, "{}", theme.format_error(&format!("{}: file not found", name)))?;
            return Ok(false);
        }

        let outcome = match EnvFileParser::parse_file(&path) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(out, "{}", theme.format_error(&format!("{}: {}", name, e)))?;
                return Ok(false);
            }
        };

        let errors: Vec<_> = outcome
            .issues
            .iter()
            .filter(|issue| matches!(issue.kind, IssueKind::MalformedLine | IssueKind::EmptyKey))
            .collect();

        if errors.is_empty() {
            writeln!(out, "{}", theme.format_success(&format!("{}: syntax OK", name)))?;
            return Ok(true);
        }

        writeln!(
            out,
            "{}",
            theme.format_error(&format!("{}: {} syntax error(s)", name, errors.len()))
        )?;
        for issue in errors {
            writeln!(
                out,
                "    line {}: {} '{}'",
                issue.first_line, issue.kind, issue.subject
            )?;
        }
        Ok(false)
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let theme = Theme::for_color(self.color);

        let mut all_ok = true;
        for file in &self.args.files {
            all_ok &= self.check_file(file, &theme, out)?;
        }

        Ok(if all_ok {
            CommandResult::success()
        } else {
            CommandResult::failure(CommandResult::ISSUES_FOUND)
        })
    }
}
