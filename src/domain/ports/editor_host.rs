//! EditorHost port - abstraction over the editor's tab surface
//!
//! The store never talks to an editor directly; it reads the open-tab
//! snapshot and issues best-effort open/close calls through this trait.

use std::path::Path;

use crate::domain::value_objects::OpenTab;

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;

/// Editor operation errors
#[derive(Debug)]
pub enum EditorError {
    /// The referenced file is gone or unreadable
    FileUnavailable(String),
    /// I/O error talking to the host
    Io(std::io::Error),
    /// Other host-side failure
    Other(String),
}

impl std::fmt::Display for EditorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditorError::FileUnavailable(path) => write!(f, "file unavailable: {}", path),
            EditorError::Io(err) => write!(f, "I/O error: {}", err),
            EditorError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditorError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        EditorError::Io(err)
    }
}

/// Abstract editor interface
///
/// Implementations:
/// - `SessionFileEditor` - tab session persisted as a JSON file
/// - `MemoryEditor` - in-memory host for embedders and tests
pub trait EditorHost {
    /// Snapshot of open tabs, left to right
    fn open_tabs(&self) -> Vec<OpenTab>;

    /// Open one file
    fn open_file(&self, path: &Path) -> EditorResult<()>;

    /// Close one file
    fn close_file(&self, path: &Path) -> EditorResult<()>;

    /// Close every open editor
    fn close_all_files(&self) -> EditorResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_error_display() {
        let err = EditorError::FileUnavailable("/ws/gone.rs".to_string());
        assert!(err.to_string().contains("/ws/gone.rs"));
    }
}
