//! Workspace file walker
//!
//! Lists every file under the workspace root with the configured ignore
//! globs applied. Standard gitignore filters stay off: the pick list
//! shows what the configuration says, nothing more.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::ports::workspace_scanner::{ScanError, ScanResult, WorkspaceScanner};
use crate::domain::value_objects::IgnorePatterns;

/// Recursive directory walker behind the `WorkspaceScanner` port
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkScanner;

impl WalkScanner {
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceScanner for WalkScanner {
    fn list_files(&self, root: &Path, ignore: &IgnorePatterns) -> ScanResult<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(ScanError::RootUnavailable(root.to_path_buf()));
        }

        let mut files = Vec::new();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .hidden(false)
            .build();

        for result in walker {
            let entry = result.map_err(|e| ScanError::Walk(e.to_string()))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(root)
                .unwrap_or(entry.path())
                .to_path_buf();
            if ignore.is_ignored(&rel, false) {
                continue;
            }
            files.push(rel);
        }

        files.sort();
        Ok(files)
    }
}
