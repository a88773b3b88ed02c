//! `.env` file discovery.
//!
//! Finds the env files `envlint lint` and `envlint fix` operate on.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{EnvLintError, Result};

/// Files linted by default when they exist in the working directory.
pub const DEFAULT_ENV_FILES: &[&str] = &[".env", ".env.local", ".env.development", ".env.production"];

/// Directories never searched for `.env` files.
const SKIP_DIRS: &[&str] = &["node_modules", "vendor", "dist", "build"];

/// Whether a file name looks like an env file: `.env` or `.env.<suffix>`.
pub fn is_env_file_name(name: &str) -> bool {
    name == ".env" || name.starts_with(".env.")
}

fn should_skip_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') || SKIP_DIRS.contains(&name))
}

/// Recursively find env files under `root`, sorted by path.
///
/// Hidden directories below the root and common dependency/build
/// directories are skipped. Unreadable entries are ignored.
pub fn find_env_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !should_skip_dir(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_str().is_some_and(is_env_file_name))
        .map(DirEntry::into_path)
        .collect();
    files.sort();
    files
}

/// The default env files that exist in `dir`, in [`DEFAULT_ENV_FILES`] order.
pub fn default_env_files(dir: &Path) -> Vec<PathBuf> {
    DEFAULT_ENV_FILES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// Resolve command-line file arguments against `root`.
///
/// Without arguments the default candidates in `root` are used, or every
/// env file below it when `recursive`. A directory argument is only
/// accepted when `recursive`.
pub fn resolve_env_files(root: &Path, args: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>> {
    if args.is_empty() {
        return Ok(if recursive {
            find_env_files(root)
        } else {
            default_env_files(root)
        });
    }

    let mut files = Vec::new();
    for arg in args {
        let path = root.join(arg);
        if recursive && path.is_dir() {
            files.extend(find_env_files(&path));
        } else if path.is_dir() {
            return Err(EnvLintError::NotAFile { path: arg.clone() });
        } else {
            files.push(path);
        }
    }
    Ok(files)
}
