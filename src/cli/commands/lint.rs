//! Lint command implementation.
//!
//! The `envlint lint` command runs the configured rules over a set of env
//! files and prints the issues in the selected output format.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::LintArgs;
use crate::config::{load_config, LintConfig};
use crate::discovery::resolve_env_files;
use crate::error::Result;
use crate::lint::{
    GithubFormatter, HumanFormatter, JsonFormatter, LintFormatter, LintReport, Linter,
    OutputFormat,
};
use crate::ui::Theme;

use super::dispatcher::{display_path, Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    args: LintArgs,
    color: bool,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
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
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    /// Required variables: project scan results first, then configured names.
    fn required_variables(&self, config: &LintConfig, out: &mut dyn Write) -> Result<Vec<String>> {
        if !self.args.auto_discover {
            return Ok(config.required_vars.clone());
        }

        let scan_root = self.project_root.join(&self.args.scan_path);
        let discovered = config
            .scan
            .scanner()?
            .scan(&scan_root)
            .required_variables(self.args.min_confidence, self.args.min_usages);

        if !self.args.quiet && self.format(config) == OutputFormat::Pretty {
            writeln!(
                out,
                "Auto-discovered {} required variables from project scan",
                discovered.len()
            )?;
        }

        Ok(merge_required(discovered, &config.required_vars))
    }

    fn format(&self, config: &LintConfig) -> OutputFormat {
        OutputFormat::from_name(self.args.format.as_deref().unwrap_or(&config.output.format))
    }

    fn write_report(
        &self,
        report: &LintReport,
        format: OutputFormat,
        color: bool,
        mut out: &mut dyn Write,
    ) -> Result<()> {
        let issues = report.issues();
        let files = report.files();

        match format {
            OutputFormat::Json => JsonFormatter::new().format(&issues, &files, &mut out)?,
            OutputFormat::Github => GithubFormatter::new().format(&issues, &files, &mut out)?,
            OutputFormat::Pretty => HumanFormatter::new(color)
                .quiet(self.args.quiet)
                .format(&issues, &files, &mut out)?,
        }

        if format == OutputFormat::Pretty {
            let theme = Theme::for_color(color);
            for failure in &report.failures {
                writeln!(out, "{}", theme.format_error(&failure.error.to_string()))?;
            }
        }
        Ok(())
    }
}

impl Command for LintCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config_path = self.args.config.as_ref().map(|p| self.project_root.join(p));
        let config = load_config(&self.project_root, config_path.as_deref())?;
        let format = self.format(&config);
        let color = self.color && config.output.color;

        let required = self.required_variables(&config, out)?;
        let files = resolve_env_files(&self.project_root, &self.args.files, self.args.recursive)?;

        if files.is_empty() && format == OutputFormat::Pretty {
            if !self.args.quiet {
                writeln!(out, "No .env files found to lint")?;
            }
            return Ok(CommandResult::success());
        }

        debug!(
            files = files.len(),
            required = required.len(),
            format = %format,
            "Linting"
        );

        let linter = Linter::from_config(&config, &required);
        let mut report = LintReport::default();
        for path in &files {
            let name = display_path(&self.project_root, path);
            report.add(path, linter.lint_file_as(path, &name));
        }

        self.write_report(&report, format, color, out)?;

        Ok(if report.has_failures() {
            CommandResult::failure(CommandResult::HARD_ERROR)
        } else if report.has_issues() {
            CommandResult::failure(CommandResult::ISSUES_FOUND)
        } else {
            CommandResult::success()
        })
    }
}

/// Merge discovered and configured names, dropping repeats.
fn merge_required(discovered: Vec<String>, configured: &[String]) -> Vec<String> {
    let mut merged = discovered;
    for name in configured {
        if !merged.contains(name) {
            merged.push(name.clone());
        }
    }
    merged
}
