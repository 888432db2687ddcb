//! Pick-list building
//!
//! Assembles the selection offered by the add-entry flow: the currently
//! open tabs first, then every workspace file that survives the ignore
//! globs. Selection itself happens in the host through the prompter
//! port; the chosen candidates go to `TreeStore::add_entries`.

use std::path::Path;

use crate::domain::ports::editor_host::EditorHost;
use crate::domain::ports::workspace_scanner::{ScanResult, WorkspaceScanner};
use crate::domain::value_objects::{FileCandidate, IgnorePatterns};

/// The two sections of the add-entry selection
#[derive(Debug, Default)]
pub struct PickList {
    /// Currently open tabs, left to right
    pub open_tabs: Vec<FileCandidate>,
    /// Workspace files, ignore-filtered, in traversal order
    pub workspace_files: Vec<FileCandidate>,
}

impl PickList {
    /// Build the pick list for one workspace
    pub fn build<E: EditorHost, W: WorkspaceScanner>(
        editor: &E,
        scanner: &W,
        workspace_root: &Path,
        ignore: &IgnorePatterns,
    ) -> ScanResult<Self> {
        let open_tabs = editor
            .open_tabs()
            .into_iter()
            .map(|tab| match tab.path() {
                Some(path) => FileCandidate::new(tab.label(), path),
                None => FileCandidate::relative(tab.label(), workspace_root),
            })
            .collect();

        let workspace_files = scanner
            .list_files(workspace_root, ignore)?
            .into_iter()
            .map(|rel| {
                let label = rel.to_string_lossy().into_owned();
                let path = workspace_root.join(&rel);
                FileCandidate { label, path }
            })
            .collect();

        Ok(Self {
            open_tabs,
            workspace_files,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.open_tabs.is_empty() && self.workspace_files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.open_tabs.len() + self.workspace_files.len()
    }

    /// Both sections flattened, open tabs first
    pub fn into_candidates(self) -> Vec<FileCandidate> {
        let mut all = self.open_tabs;
        all.extend(self.workspace_files);
        all
    }
}
