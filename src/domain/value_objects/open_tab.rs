//! Open-tab snapshot types
//!
//! `OpenTab` is one element of the editor host's left-to-right tab
//! snapshot; `FileCandidate` is one selectable item in the add-entry flow.

use std::path::{Path, PathBuf};

/// One currently open editor tab
///
/// File-backed tabs carry the resolved path; preview panes and other
/// non-file tabs only have their raw label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenTab {
    label: String,
    path: Option<PathBuf>,
}

impl OpenTab {
    /// A file-backed tab
    pub fn file(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
        }
    }

    /// A tab with no backing file
    pub fn unbacked(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A labeled file reference offered for (or chosen from) a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// Display label, workspace-relative for workspace files
    pub label: String,
    /// Resolved path the entry will reference
    pub path: PathBuf,
}

impl FileCandidate {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Candidate for a workspace-relative label; the path resolves against
    /// the workspace root.
    pub fn relative(label: impl Into<String>, workspace_root: &Path) -> Self {
        let label = label.into();
        let path = workspace_root.join(&label);
        Self { label, path }
    }
}
