// src/cli/paths.rs
//
// Shared path expansion utilities for CLI commands.

use std::collections::HashSet;
use std::path::PathBuf;

use glob::glob;

use crate::fmt::config::FileKind;

/// Errors that can occur during path expansion
#[derive(Debug)]
pub enum PathError {
    /// Glob pattern syntax error
    InvalidPattern { pattern: String, message: String },
    /// IO error (permissions, etc.)
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::InvalidPattern { pattern, message } => {
                write!(f, "invalid glob pattern '{}': {}", pattern, message)
            }
            PathError::IoError { path, source } => {
                write!(f, "error reading '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Expand a list of path patterns into concrete sortable file paths.
///
/// Each pattern can be:
/// - A direct file path (e.g., "app.tsx")
/// - A directory (expands recursively to every registered extension)
/// - A glob pattern (e.g., "src/**/*.ts")
///
/// Path ordering:
/// - Explicit file paths preserve their input order
/// - Glob/directory expansions are appended after explicit files
/// - Duplicates are removed (glob results matching explicit files are excluded)
///
/// Returns deduplicated paths. Empty result is valid (not an error).
pub fn expand_paths(patterns: &[String]) -> Result<Vec<PathBuf>, PathError> {
    let mut explicit_files = Vec::new();
    let mut glob_files = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for pattern in patterns {
        expand_pattern(pattern, &mut explicit_files, &mut glob_files, &mut seen)?;
    }

    explicit_files.extend(glob_files);

    Ok(explicit_files)
}

/// Expand a single pattern into file paths
fn expand_pattern(
    pattern: &str,
    explicit_files: &mut Vec<PathBuf>,
    glob_files: &mut Vec<PathBuf>,
    seen: &mut HashSet<PathBuf>,
) -> Result<(), PathError> {
    let path = PathBuf::from(pattern);

    if path.is_file() {
        // Direct file path - add to explicit files (preserves order).
        // Silently skip files of unregistered kinds when explicitly named.
        if FileKind::from_path(&path).is_some() {
            add_unique(path, explicit_files, seen);
        }
    } else if path.is_dir() {
        let glob_pattern = format!("{}/**/*", pattern);
        expand_glob(&glob_pattern, glob_files, seen)?;
    } else {
        expand_glob(pattern, glob_files, seen)?;
    }

    Ok(())
}

/// Expand a glob pattern and add files of registered kinds
fn expand_glob(
    pattern: &str,
    files: &mut Vec<PathBuf>,
    seen: &mut HashSet<PathBuf>,
) -> Result<(), PathError> {
    let entries = glob(pattern).map_err(|e| PathError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.msg.to_string(),
    })?;

    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_file() && FileKind::from_path(&path).is_some() {
                    add_unique(path, files, seen);
                }
            }
            Err(e) => {
                return Err(PathError::IoError {
                    path: e.path().to_path_buf(),
                    source: e.into_error(),
                });
            }
        }
    }

    Ok(())
}

/// Add a path if not already seen (uses canonical path for deduplication)
fn add_unique(path: PathBuf, files: &mut Vec<PathBuf>, seen: &mut HashSet<PathBuf>) {
    let key = path.canonicalize().unwrap_or_else(|_| path.clone());
    if seen.insert(key) {
        files.push(path);
    }
}
