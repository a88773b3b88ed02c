//! Automatic fix application.
//!
//! Rewrites the problems in an env file that can be corrected without
//! guessing intent: key naming, stray whitespace around values, unquoted
//! values with shell-significant characters, and duplicate assignments.
//! Malformed lines and empty keys are left for a human.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::RuleToggles;
use crate::error::{EnvLintError, Result};
use crate::lint::rules::camel_to_snake;
use crate::lint::rules::convention::REDUNDANT_PREFIXES;

/// What happens to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixAction {
    /// Replace the line with new text.
    Rewrite(String),
    /// Drop the line from the file.
    Remove,
}

/// A fix for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFix {
    /// 1-based line number in the original content.
    pub line: usize,
    /// The line as it was.
    pub original: String,
    /// The replacement.
    pub action: FixAction,
    /// What was fixed, e.g. `fixed naming convention, added quotes`.
    pub description: String,
}

impl LineFix {
    /// The replacement text, or `None` when the line is removed.
    pub fn replacement(&self) -> Option<&str> {
        match &self.action {
            FixAction::Rewrite(text) => Some(text),
            FixAction::Remove => None,
        }
    }
}

/// Fixes planned for one file's content.
#[derive(Debug, Clone, Default)]
pub struct FixPlan {
    /// Fixes in line order.
    pub fixes: Vec<LineFix>,
    lines: Vec<String>,
    trailing_newline: bool,
}

impl FixPlan {
    /// Whether there is nothing to fix.
    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Number of fixes.
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    /// The content with every fix applied.
    pub fn render(&self) -> String {
        let mut fixes = self.fixes.iter().peekable();
        let mut kept = Vec::with_capacity(self.lines.len());

        for (idx, line) in self.lines.iter().enumerate() {
            match fixes.next_if(|fix| fix.line == idx + 1) {
                Some(fix) => {
                    if let Some(text) = fix.replacement() {
                        kept.push(text);
                    }
                }
                None => kept.push(line.as_str()),
            }
        }

        let mut content = kept.join("\n");
        if self.trailing_newline && !content.is_empty() {
            content.push('\n');
        }
        content
    }
}

/// Convert a key to UPPER_SNAKE_CASE and drop a redundant prefix.
///
/// camelCase is split into words, `-`, `.` and whitespace become
/// underscores, other characters are dropped and underscore runs collapse.
/// A key that would end up empty is returned unchanged.
///
/// # Example
///
/// ```
/// use envlint::lint::fix::fix_key;
///
/// assert_eq!(fix_key("databaseUrl"), "DATABASE_URL");
/// assert_eq!(fix_key("ENV_api-key"), "API_KEY");
/// ```
pub fn fix_key(key: &str) -> String {
    let mut fixed = String::with_capacity(key.len());
    for c in camel_to_snake(key).chars() {
        if c.is_ascii_alphanumeric() {
            fixed.push(c.to_ascii_uppercase());
        } else if matches!(c, '_' | '-' | '.' | ' ' | '\t')
            && !fixed.is_empty()
            && !fixed.ends_with('_')
        {
            fixed.push('_');
        }
    }
    let fixed = fixed.trim_end_matches('_');

    let fixed = REDUNDANT_PREFIXES
        .iter()
        .find_map(|prefix| fixed.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(fixed);

    if fixed.is_empty() {
        key.to_string()
    } else {
        fixed.to_string()
    }
}

/// Whether a value contains characters a shell or dotenv loader would
/// interpret.
pub fn needs_quoting(value: &str) -> bool {
    !value.is_empty() && (value.contains([' ', '$', '`', '"', '\'']) || value.starts_with('#'))
}

/// Whether a value is already wrapped in matching quotes.
pub fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
}

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> EnvLintError {
    let path = path.to_path_buf();
    move |source| EnvLintError::FileWrite { path, source }
}

fn quote(value: &str) -> String {
    if value.contains('"') && !value.contains('\'') {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value.replace('"', "\\\""))
    }
}

/// One assignment line after key normalization.
struct Assignment {
    line: usize,
    key: String,
    rewrite: Option<(String, Vec<&'static str>)>,
}

/// Plans and applies fixes to env files.
///
/// # Example
///
/// ```
/// use envlint::lint::fix::FixEngine;
///
/// let plan = FixEngine::new().plan("PORT=1\nPORT=2\n");
///
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.render(), "PORT=2\n");
/// ```
#[derive(Debug, Clone)]
pub struct FixEngine {
    convention: bool,
    duplicates: bool,
}

impl FixEngine {
    /// Create a fix engine with every fix enabled.
    pub fn new() -> Self {
        Self {
            convention: true,
            duplicates: true,
        }
    }

    /// Create a fix engine that follows the configured rules.
    ///
    /// Key renaming needs the `convention` rule and duplicate removal the
    /// `duplicate` rule. Whitespace and quoting fixes always apply.
    pub fn from_toggles(toggles: &RuleToggles) -> Self {
        Self {
            convention: toggles.convention,
            duplicates: toggles.duplicate,
        }
    }

    fn assignment(&self, raw: &str, line: usize) -> Option<Assignment> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        let (key, raw_value) = trimmed.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }

        let mut changes = Vec::new();

        let mut fixed_key = key.to_string();
        if self.convention {
            let renamed = fix_key(key);
            if renamed != key {
                fixed_key = renamed;
                changes.push("fixed naming convention");
            }
        }

        let mut value = raw_value.trim().to_string();
        if value != raw_value {
            changes.push("removed leading/trailing whitespace");
        }
        if needs_quoting(&value) && !is_quoted(&value) {
            value = quote(&value);
            changes.push("added quotes");
        }

        let rewrite = (!changes.is_empty()).then(|| (format!("{}={}", fixed_key, value), changes));
        Some(Assignment {
            line,
            key: fixed_key,
            rewrite,
        })
    }

    /// Plan the fixes for `content` without touching the filesystem.
    ///
    /// Duplicates are detected on the fixed key, so `db-url` and `DB_URL`
    /// collapse once the convention fix is on. The last occurrence wins.
    pub fn plan(&self, content: &str) -> FixPlan {
        let lines: Vec<String> = content.lines().map(String::from).collect();
        let assignments: Vec<Assignment> = lines
            .iter()
            .enumerate()
            .filter_map(|(idx, raw)| self.assignment(raw, idx + 1))
            .collect();

        let mut fixes = Vec::new();
        for (pos, assignment) in assignments.iter().enumerate() {
            let original = lines[assignment.line - 1].clone();

            let kept = if self.duplicates {
                assignments[pos + 1..]
                    .iter()
                    .rev()
                    .find(|later| later.key == assignment.key)
            } else {
                None
            };

            if let Some(kept) = kept {
                fixes.push(LineFix {
                    line: assignment.line,
                    original,
                    action: FixAction::Remove,
                    description: format!(
                        "removed duplicate variable '{}' (kept line {})",
                        assignment.key, kept.line
                    ),
                });
            } else if let Some((text, changes)) = &assignment.rewrite {
                fixes.push(LineFix {
                    line: assignment.line,
                    original,
                    action: FixAction::Rewrite(text.clone()),
                    description: changes.join(", "),
                });
            }
        }

        FixPlan {
            fixes,
            lines,
            trailing_newline: content.ends_with('\n'),
        }
    }

    /// Read `path` and plan its fixes.
    ///
    /// Files that are not valid UTF-8 are refused rather than rewritten
    /// lossily.
    pub fn plan_file(&self, path: &Path) -> Result<FixPlan> {
        let content = fs::read_to_string(path).map_err(|source| EnvLintError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let plan = self.plan(&content);
        debug!(file = %path.display(), fixes = plan.len(), "Planned fixes");
        Ok(plan)
    }

    /// Write a plan back to `path`.
    ///
    /// With `backup` the current content is first copied to
    /// `<path>.backup`, whose location is returned.
    pub fn apply(&self, path: &Path, plan: &FixPlan, backup: bool) -> Result<Option<PathBuf>> {
        let backup_path = if backup {
            let mut name = path.as_os_str().to_os_string();
            name.push(".backup");
            let backup_path = PathBuf::from(name);
            fs::copy(path, &backup_path).map_err(write_error(&backup_path))?;
            Some(backup_path)
        } else {
            None
        };

        fs::write(path, plan.render()).map_err(write_error(path))?;
        debug!(file = %path.display(), fixes = plan.len(), "Applied fixes");
        Ok(backup_path)
    }
}

impl Default for FixEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn descriptions(plan: &FixPlan) -> Vec<&str> {
        plan.fixes.iter().map(|f| f.description.as_str()).collect()
    }

    #[test]
    fn fix_key_conversions() {
        assert_eq!(fix_key("database_url"), "DATABASE_URL");
        assert_eq!(fix_key("databaseUrl"), "DATABASE_URL");
        assert_eq!(fix_key("api-key"), "API_KEY");
        assert_eq!(fix_key("app.name"), "APP_NAME");
        assert_eq!(fix_key("MY KEY"), "MY_KEY");
        assert_eq!(fix_key("__DOUBLE__UNDERSCORE__"), "DOUBLE_UNDERSCORE");
        assert_eq!(fix_key("price$"), "PRICE");
        assert_eq!(fix_key("PORT"), "PORT");
    }

    #[test]
    fn fix_key_strips_redundant_prefix() {
        assert_eq!(fix_key("ENV_DATABASE_URL"), "DATABASE_URL");
        assert_eq!(fix_key("var_port"), "PORT");
        // Stripping would leave nothing
        assert_eq!(fix_key("ENV_"), "ENV");
    }

    #[test]
    fn fix_key_keeps_unfixable_key() {
        assert_eq!(fix_key("$$$"), "$$$");
    }

    #[test]
    fn quoting_rules() {
        assert!(needs_quoting("hello world"));
        assert!(needs_quoting("#notacomment"));
        assert!(needs_quoting("cost$5"));
        assert!(!needs_quoting("plain"));
        assert!(!needs_quoting(""));

        assert!(is_quoted("\"a b\""));
        assert!(is_quoted("'a b'"));
        assert!(!is_quoted("\"a b'"));
        assert!(!is_quoted("\""));
    }

    #[test]
    fn clean_content_has_no_fixes() {
        let plan = FixEngine::new().plan("# comment\n\nPORT=8080\nNAME=\"my app\"\n");

        assert!(plan.is_empty());
        assert_eq!(plan.render(), "# comment\n\nPORT=8080\nNAME=\"my app\"\n");
    }

    #[test]
    fn rewrites_key_whitespace_and_quotes() {
        let plan = FixEngine::new().plan("appName =  my app\n");

        assert_eq!(plan.len(), 1);
        let fix = &plan.fixes[0];
        assert_eq!(fix.line, 1);
        assert_eq!(fix.original, "appName =  my app");
        assert_eq!(fix.replacement(), Some("APP_NAME=\"my app\""));
        assert_eq!(
            fix.description,
            "fixed naming convention, removed leading/trailing whitespace, added quotes"
        );
    }

    #[test]
    fn quotes_with_single_quotes_when_value_has_double_quotes() {
        let plan = FixEngine::new().plan("GREETING=say \"hi\"\n");

        assert_eq!(plan.fixes[0].replacement(), Some("GREETING='say \"hi\"'"));
    }

    #[test]
    fn removes_earlier_duplicates() {
        let plan = FixEngine::new().plan("PORT=1\nHOST=a\nPORT=2\nPORT=3\n");

        assert_eq!(
            descriptions(&plan),
            vec![
                "removed duplicate variable 'PORT' (kept line 4)",
                "removed duplicate variable 'PORT' (kept line 4)",
            ]
        );
        assert_eq!(plan.fixes[0].action, FixAction::Remove);
        assert_eq!(plan.render(), "HOST=a\nPORT=3\n");
    }

    #[test]
    fn duplicates_compare_fixed_keys() {
        let plan = FixEngine::new().plan("db-url=a\nDB_URL=b\n");

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.render(), "DB_URL=b\n");
    }

    #[test]
    fn toggles_limit_fixes() {
        let toggles = RuleToggles {
            convention: false,
            duplicate: false,
            ..RuleToggles::default()
        };
        let plan = FixEngine::from_toggles(&toggles).plan("apiKey=1\napiKey= 2\n");

        assert_eq!(descriptions(&plan), vec!["removed leading/trailing whitespace"]);
        assert_eq!(plan.render(), "apiKey=1\napiKey=2\n");
    }

    #[test]
    fn leaves_malformed_lines_and_empty_keys() {
        let plan = FixEngine::new().plan("NOT AN ASSIGNMENT\n= value\n");

        assert!(plan.is_empty());
    }

    #[test]
    fn keeps_missing_trailing_newline() {
        let plan = FixEngine::new().plan("A_KEY= 1");

        assert_eq!(plan.render(), "A_KEY=1");
    }

    #[test]
    fn apply_writes_file_and_backup() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "PORT=1\nPORT=2\n").unwrap();

        let engine = FixEngine::new();
        let plan = engine.plan_file(&path).unwrap();
        let backup = engine.apply(&path, &plan, true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "PORT=2\n");
        let backup = backup.unwrap();
        assert_eq!(backup, temp.path().join(".env.backup"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "PORT=1\nPORT=2\n");
    }

    #[test]
    fn plan_file_refuses_invalid_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, b"NAME=caf\xe9\n").unwrap();

        let err = FixEngine::new().plan_file(&path).unwrap_err();

        assert!(matches!(err, EnvLintError::FileRead { .. }));
    }
}
