//! WorkspaceScanner port - abstraction over directory traversal
//!
//! Lists candidate files under the workspace root for the add-entry pick
//! list, with the configured ignore globs already applied.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::IgnorePatterns;

/// Result type for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Scan operation errors
#[derive(Debug)]
pub enum ScanError {
    /// The workspace root is missing or unreadable
    RootUnavailable(PathBuf),
    /// I/O error during traversal
    Io(std::io::Error),
    /// Walker-internal failure
    Walk(String),
}

impl std::fmt::Display for ScanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::RootUnavailable(path) => {
                write!(f, "workspace root unavailable: {}", path.display())
            }
            ScanError::Io(err) => write!(f, "I/O error: {}", err),
            ScanError::Walk(msg) => write!(f, "scan failed: {}", msg),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err)
    }
}

/// Abstract workspace file lister
pub trait WorkspaceScanner {
    /// All files under `root`, workspace-relative, ignore-filtered,
    /// in traversal order
    fn list_files(&self, root: &Path, ignore: &IgnorePatterns) -> ScanResult<Vec<PathBuf>>;
}
