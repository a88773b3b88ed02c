//! Project scanner.
//!
//! Walks a directory tree, applies every catalog pattern to every line of
//! each eligible file and records confidence-scored usages. Unreadable
//! entries are collected as [`ScanError`]s; the walk never aborts.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::aggregate::{ScanResult, UsageRecord};
use super::confidence::confidence;
use super::pattern::{PatternCatalog, PatternDefinition};

/// Directories skipped by default.
pub const DEFAULT_EXCLUDE_PATHS: &[&str] = &[
    "node_modules",
    "vendor",
    "dist",
    "build",
    ".git",
    "target",
    "bin",
    "obj",
    ".next",
    ".nuxt",
];

/// Extensions (with leading dot) and exact file names scanned by default.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    ".go",
    ".js",
    ".ts",
    ".jsx",
    ".tsx",
    ".py",
    ".java",
    ".rb",
    ".php",
    ".cs",
    ".cpp",
    ".c",
    ".rs",
    ".kt",
    ".scala",
    ".sh",
    ".bash",
    ".zsh",
    ".fish",
    ".ps1",
    ".yml",
    ".yaml",
    ".json",
    ".toml",
    ".ini",
    ".conf",
    ".dockerfile",
    "Dockerfile",
    ".env",
    ".env.example",
];

/// A non-fatal error collected during a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory entry could not be accessed.
    #[error("error accessing {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be read.
    #[error("error scanning {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Path the error relates to.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::Walk { path, .. } | ScanError::Read { path, .. } => path,
        }
    }
}

/// Discovers environment variable usage across a project.
///
/// # Example
///
/// ```no_run
/// use envlint::scan::Scanner;
///
/// let result = Scanner::new()
///     .with_exclude_paths(["fixtures"])
///     .scan(".");
///
/// for name in result.required_variables(0.7, 1) {
///     println!("{}", name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Scanner {
    catalog: PatternCatalog,
    exclude_paths: Vec<String>,
    include_extensions: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner {
    /// A scanner with the built-in catalog and default filters.
    pub fn new() -> Self {
        Self::with_catalog(PatternCatalog::builtin())
    }

    /// A scanner using `catalog` and the default filters.
    pub fn with_catalog(catalog: PatternCatalog) -> Self {
        Self {
            catalog,
            exclude_paths: DEFAULT_EXCLUDE_PATHS.iter().map(|s| s.to_string()).collect(),
            include_extensions: DEFAULT_INCLUDE_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Append patterns after the current catalog.
    pub fn with_custom_patterns(
        mut self,
        patterns: impl IntoIterator<Item = PatternDefinition>,
    ) -> Self {
        self.catalog = self.catalog.extended(patterns);
        self
    }

    /// Skip additional directories whose relative path contains any of `paths`.
    pub fn with_exclude_paths<S: Into<String>>(mut self, paths: impl IntoIterator<Item = S>) -> Self {
        self.exclude_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Replace the extension and file name allow-list.
    pub fn with_include_extensions<S: Into<String>>(
        mut self,
        extensions: impl IntoIterator<Item = S>,
    ) -> Self {
        self.include_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn exclude_paths(&self) -> &[String] {
        &self.exclude_paths
    }

    pub fn include_extensions(&self) -> &[String] {
        &self.include_extensions
    }

    fn is_excluded_dir(&self, root: &Path, dir: &Path) -> bool {
        let relative = dir.strip_prefix(root).unwrap_or(dir).to_string_lossy();
        self.exclude_paths
            .iter()
            .any(|exclude| relative.contains(exclude.as_str()))
    }

    /// Whether `path` passes the extension/file name allow-list.
    pub fn should_scan_file(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()));

        self.include_extensions.iter().any(|include| {
            *include == file_name || extension.as_deref() == Some(include.as_str())
        })
    }

    /// Scan in-memory content as if it were `file`.
    pub fn scan_content(&self, content: &str, file: &str) -> ScanResult {
        let mut usages = Vec::new();

        for (index, line) in content.lines().enumerate() {
            for pattern in self.catalog.iter() {
                for variable in pattern.candidates(line) {
                    usages.push(UsageRecord {
                        variable: variable.to_string(),
                        file: file.to_string(),
                        line: index + 1,
                        context: line.trim().to_string(),
                        pattern_name: pattern.name.clone(),
                        confidence: confidence(variable, line),
                    });
                }
            }
        }

        ScanResult::for_file(file, usages)
    }

    /// Scan one file. Non-UTF-8 bytes are replaced rather than rejected.
    pub fn scan_file(&self, path: &Path) -> Result<ScanResult, ScanError> {
        let bytes = fs::read(path).map_err(|source| ScanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);

        let result = self.scan_content(&content, &path.display().to_string());
        debug!(
            file = %path.display(),
            usages = result.total_usages(),
            "Scanned file"
        );
        Ok(result)
    }

    /// Scan every eligible file under `root`.
    ///
    /// The root itself is never excluded. Entries are visited in file name
    /// order so results are reproducible.
    pub fn scan(&self, root: impl AsRef<Path>) -> ScanResult {
        let root = root.as_ref();

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0 || !e.file_type().is_dir() || !self.is_excluded_dir(root, e.path())
            });

        let mut result = ScanResult::default();
        for entry in walker {
            let partial = match entry {
                // Symlinked files are followed; symlinked directories are not
                Ok(entry) if entry.path().is_file() && self.should_scan_file(entry.path()) => {
                    self.scan_file(entry.path()).unwrap_or_else(ScanResult::for_error)
                }
                Ok(_) => continue,
                Err(source) => {
                    let path = source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    ScanResult::for_error(ScanError::Walk { path, source })
                }
            };

            for error in &partial.errors {
                warn!(%error, "Skipping unreadable entry");
            }
            result = result.merge(partial);
        }

        info!(
            root = %root.display(),
            files = result.files_scanned.len(),
            variables = result.variable_count(),
            errors = result.errors.len(),
            "Scan complete"
        );
        result
    }
}
