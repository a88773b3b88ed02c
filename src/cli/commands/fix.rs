//! Fix command implementation.
//!
//! The `envlint fix` command rewrites the issues that can be corrected
//! safely, or previews the rewrites with `--dry-run`.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::FixArgs;
use crate::config::load_config;
use crate::discovery::resolve_env_files;
use crate::error::Result;
use crate::lint::{FixEngine, FixPlan};
use crate::ui::Theme;

use super::dispatcher::{display_path, Command, CommandResult};

/// The fix command implementation.
pub struct FixCommand {
    project_root: PathBuf,
    args: FixArgs,
    color: bool,
}

impl FixCommand {
    /// Create a new fix command.
    pub fn new(project_root: &Path, args: FixArgs) -> Self {
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
    pub fn args(&self) -> &FixArgs {
        &self.args
    }

    fn preview(&self, name: &str, plan: &FixPlan, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "🔍 {} ({} fix(es) would be applied):", name, plan.len())?;
        for fix in &plan.fixes {
            writeln!(out, "  Line {}: {}", fix.line, fix.description)?;
            writeln!(out, "    - {}", fix.original)?;
            if let Some(text) = fix.replacement() {
                writeln!(out, "    + {}", text)?;
            }
        }
        Ok(())
    }

    /// Fix one file, returning how many fixes it needed.
    fn fix_file(
        &self,
        engine: &FixEngine,
        path: &Path,
        theme: &Theme,
        out: &mut dyn Write,
    ) -> Result<usize> {
        let name = display_path(&self.project_root, path);
        let plan = engine.plan_file(path)?;

        if plan.is_empty() {
            writeln!(out, "{}", theme.format_success(&format!("{}: no issues to fix", name)))?;
            return Ok(0);
        }

        if self.args.dry_run {
            self.preview(&name, &plan, out)?;
            return Ok(plan.len());
        }

        if let Some(backup) = engine.apply(path, &plan, self.args.backup)? {
            writeln!(out, "📋 Created backup: {}", display_path(&self.project_root, &backup))?;
        }
        writeln!(out, "🔧 {}: fixed {} issue(s)", name, plan.len())?;
        for fix in &plan.fixes {
            writeln!(
                out,
                "  {}",
                theme.format_success(&format!("Line {}: {}", fix.line, fix.description))
            )?;
        }
        Ok(plan.len())
    }
}

impl Command for FixCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config_path = self.args.config.as_ref().map(|p| self.project_root.join(p));
        let config = load_config(&self.project_root, config_path.as_deref())?;
        let theme = Theme::for_color(self.color && config.output.color);

        let files = resolve_env_files(&self.project_root, &self.args.files, self.args.recursive)?;
        if files.is_empty() {
            writeln!(out, "No .env files found to fix")?;
            return Ok(CommandResult::success());
        }

        debug!(files = files.len(), dry_run = self.args.dry_run, "Fixing");

        let engine = FixEngine::from_toggles(&config.rules);
        let mut total = 0;
        let mut failed = false;
        for path in &files {
            match self.fix_file(&engine, path, &theme, out) {
                Ok(count) => total += count,
                Err(e) => {
                    failed = true;
                    writeln!(
                        out,
                        "{}",
                        theme.format_error(&format!(
                            "{}: {}",
                            display_path(&self.project_root, path),
                            e
                        ))
                    )?;
                }
            }
        }

        writeln!(out)?;
        if self.args.dry_run {
            writeln!(
                out,
                "Dry run complete. Found {} fixable issue(s) across {} file(s)",
                total,
                files.len()
            )?;
            if total > 0 {
                writeln!(out, "Run without --dry-run to apply fixes")?;
            }
        } else {
            writeln!(out, "Fixed {} issue(s) across {} file(s)", total, files.len())?;
        }

        Ok(if failed {
            CommandResult::failure(CommandResult::HARD_ERROR)
        } else {
            CommandResult::success()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run(root: &Path, args: FixArgs) -> (CommandResult, String) {
        let mut out = Vec::new();
        let result = FixCommand::new(root, args).execute(&mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn fixes_default_file_in_place() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "PORT=1\nNAME= my app\nPORT=2\n").unwrap();

        let (result, output) = run(temp.path(), FixArgs::default());

        assert!(result.success);
        assert_eq!(fs::read_to_string(&path).unwrap(), "NAME=\"my app\"\nPORT=2\n");
        assert!(output.contains("🔧 .env: fixed 2 issue(s)"));
        assert!(output.contains("Line 1: removed duplicate variable 'PORT' (kept line 3)"));
        assert!(output.contains("Line 2: removed leading/trailing whitespace, added quotes"));
        assert!(output.contains("Fixed 2 issue(s) across 1 file(s)"));
    }

    #[test]
    fn dry_run_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "KEY= value\n").unwrap();
        let args = FixArgs {
            dry_run: true,
            ..FixArgs::default()
        };

        let (result, output) = run(temp.path(), args);

        assert!(result.success);
        assert_eq!(fs::read_to_string(&path).unwrap(), "KEY= value\n");
        assert!(output.contains("🔍 .env (1 fix(es) would be applied):"));
        assert!(output.contains("    - KEY= value\n    + KEY=value\n"));
        assert!(output.contains("Dry run complete. Found 1 fixable issue(s) across 1 file(s)"));
    }

    #[test]
    fn backup_keeps_original_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env.local"), "A_KEY=1\nA_KEY=2\n").unwrap();
        let args = FixArgs {
            files: vec![PathBuf::from(".env.local")],
            backup: true,
            ..FixArgs::default()
        };

        let (_, output) = run(temp.path(), args);

        assert!(output.contains("Created backup: .env.local.backup"));
        assert_eq!(
            fs::read_to_string(temp.path().join(".env.local.backup")).unwrap(),
            "A_KEY=1\nA_KEY=2\n"
        );
        assert_eq!(
            fs::read_to_string(temp.path().join(".env.local")).unwrap(),
            "A_KEY=2\n"
        );
    }

    #[test]
    fn convention_fixes_follow_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "apiKey=1\n").unwrap();

        let (_, output) = run(temp.path(), FixArgs::default());
        assert!(output.contains(".env: no issues to fix"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "apiKey=1\n");

        fs::write(temp.path().join(".envlint.yaml"), "rules:\n  convention: true\n").unwrap();
        let (_, output) = run(temp.path(), FixArgs::default());
        assert!(output.contains("Line 1: fixed naming convention"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "API_KEY=1\n");
    }

    #[test]
    fn no_files_found() {
        let temp = TempDir::new().unwrap();

        let (result, output) = run(temp.path(), FixArgs::default());

        assert!(result.success);
        assert_eq!(output, "No .env files found to fix\n");
    }

    #[test]
    fn missing_file_is_reported_and_others_still_fixed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), "X_KEY= 1\n").unwrap();
        let args = FixArgs {
            files: vec![PathBuf::from(".env.gone"), PathBuf::from(".env")],
            ..FixArgs::default()
        };

        let (result, output) = run(temp.path(), args);

        assert_eq!(result.exit_code, CommandResult::HARD_ERROR);
        assert!(output.contains("✗ .env.gone: Cannot read"));
        assert_eq!(fs::read_to_string(temp.path().join(".env")).unwrap(), "X_KEY=1\n");
        assert!(output.contains("Fixed 1 issue(s) across 2 file(s)"));
    }
}
