//! Scan command implementation.
//!
//! The `envlint scan` command walks a project, collects environment
//! variable usages and reports the names the code most likely requires.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::json;

use crate::cli::args::ScanArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::lint::OutputFormat;
use crate::scan::{ScanResult, UsageRecord};
use crate::ui::Theme;

use super::dispatcher::{display_path, Command, CommandResult};

/// The scan command implementation.
pub struct ScanCommand {
    project_root: PathBuf,
    args: ScanArgs,
    color: bool,
}

impl ScanCommand {
    /// Create a new scan command.
    pub fn new(project_root: &Path, args: ScanArgs) -> Self {
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
    pub fn args(&self) -> &ScanArgs {
        &self.args
    }

    fn location(&self, usage: &UsageRecord) -> String {
        format!(
            "{}:{}",
            display_path(&self.project_root, Path::new(&usage.file)),
            usage.line
        )
    }

    fn write_pretty(&self, result: &ScanResult, required: &[String], out: &mut dyn Write) -> Result<()> {
        let theme = Theme::for_color(self.color);

        writeln!(
            out,
            "Scanned {} file(s): {} variable(s), {} usage(s)",
            result.files_scanned.len(),
            result.variable_count(),
            result.total_usages()
        )?;
        writeln!(out)?;

        if required.is_empty() {
            writeln!(out, "{}", theme.format_warning("No variables met the thresholds"))?;
        } else {
            writeln!(
                out,
                "{}",
                theme.highlight.apply_to(format!(
                    "Required variables (confidence >= {:.2}, usages >= {}):",
                    self.args.min_confidence, self.args.min_usages
                ))
            )?;
            for name in required {
                let usages = result.usages(name);
                writeln!(
                    out,
                    "  {} ({} usage(s), confidence {:.2})",
                    theme.file.apply_to(name),
                    usages.len(),
                    result.average_confidence(name).unwrap_or_default()
                )?;
                if self.args.show_usages {
                    for usage in usages {
                        writeln!(
                            out,
                            "{}",
                            theme.dim.apply_to(format!(
                                "      {} [{}] {}",
                                self.location(usage),
                                usage.pattern_name,
                                usage.context
                            ))
                        )?;
                    }
                }
            }
        }

        if !result.errors.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "{}",
                theme.format_warning(&format!("{} error(s) during scan:", result.errors.len()))
            )?;
            for error in &result.errors {
                writeln!(out, "  {}", error)?;
            }
        }
        Ok(())
    }

    fn write_json(&self, result: &ScanResult, required: &[String], out: &mut dyn Write) -> Result<()> {
        let variables: Vec<_> = required
            .iter()
            .map(|name| {
                let usages = result.usages(name);
                let mut entry = json!({
                    "name": name,
                    "usages": usages.len(),
                    "confidence": result.average_confidence(name).unwrap_or_default(),
                });
                if self.args.show_usages {
                    entry["locations"] = usages
                        .iter()
                        .map(|usage| {
                            json!({
                                "file": display_path(&self.project_root, Path::new(&usage.file)),
                                "line": usage.line,
                                "context": usage.context,
                                "pattern": usage.pattern_name,
                                "confidence": usage.confidence,
                            })
                        })
                        .collect();
                }
                entry
            })
            .collect();

        let report = json!({
            "files_scanned": result.files_scanned.len(),
            "variables_found": result.variable_count(),
            "total_usages": result.total_usages(),
            "required": variables,
            "errors": result.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
        });

        serde_json::to_writer_pretty(&mut *out, &report).map_err(anyhow::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Command for ScanCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let config_path = self.args.config.as_ref().map(|p| self.project_root.join(p));
        let config = load_config(&self.project_root, config_path.as_deref())?;

        let scanner = config
            .scan
            .scanner()?
            .with_exclude_paths(self.args.exclude.iter().cloned());
        let result = scanner.scan(self.project_root.join(&self.args.path));
        let required = result.required_variables(self.args.min_confidence, self.args.min_usages);

        match OutputFormat::from_name(&self.args.format) {
            OutputFormat::Json => self.write_json(&result, &required, out)?,
            _ => self.write_pretty(&result, &required, out)?,
        }

        Ok(CommandResult::success())
    }
}
