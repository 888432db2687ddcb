//! Session-file editor host
//!
//! Represents the editor's open tabs as a JSON list on disk. Editors (or
//! their integration scripts) that can export and watch such a session
//! file get working open/close/import/sync behavior without any direct
//! editor API. The tab labels are workspace-relative for files under the
//! workspace root, mirroring how the tab strip shows them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ports::editor_host::{EditorError, EditorHost, EditorResult};
use crate::domain::value_objects::OpenTab;
use crate::infrastructure::fs::LocalFs;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionTab {
    label: String,
    #[serde(default)]
    path: Option<PathBuf>,
}

/// File-backed implementation of the `EditorHost` port
#[derive(Debug, Clone)]
pub struct SessionFileEditor {
    session_path: PathBuf,
    workspace_root: PathBuf,
    fs: LocalFs,
}

impl SessionFileEditor {
    pub fn new(session_path: impl Into<PathBuf>, workspace_root: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
            workspace_root: workspace_root.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    fn label_for(&self, path: &Path) -> String {
        path.strip_prefix(&self.workspace_root)
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }

    fn read_session(&self) -> EditorResult<Vec<SessionTab>> {
        if !self.fs.exists(&self.session_path) {
            return Ok(Vec::new());
        }
        let content = self.fs.read(&self.session_path)?;
        serde_json::from_str(&content).map_err(|e| EditorError::Other(e.to_string()))
    }

    fn write_session(&self, tabs: &[SessionTab]) -> EditorResult<()> {
        let content =
            serde_json::to_string_pretty(tabs).map_err(|e| EditorError::Other(e.to_string()))?;
        self.fs.write(&self.session_path, &content)?;
        Ok(())
    }
}

impl EditorHost for SessionFileEditor {
    fn open_tabs(&self) -> Vec<OpenTab> {
        // The snapshot interface is infallible; an unreadable session
        // reads as no open tabs.
        let session = self.read_session().unwrap_or_default();
        session
            .into_iter()
            .map(|tab| match tab.path {
                Some(path) => OpenTab::file(tab.label, path),
                None => OpenTab::unbacked(tab.label),
            })
            .collect()
    }

    fn open_file(&self, path: &Path) -> EditorResult<()> {
        let mut session = self.read_session()?;
        if session.iter().any(|tab| tab.path.as_deref() == Some(path)) {
            return Ok(());
        }
        session.push(SessionTab {
            label: self.label_for(path),
            path: Some(path.to_path_buf()),
        });
        self.write_session(&session)
    }

    fn close_file(&self, path: &Path) -> EditorResult<()> {
        let mut session = self.read_session()?;
        session.retain(|tab| tab.path.as_deref() != Some(path));
        self.write_session(&session)
    }

    fn close_all_files(&self) -> EditorResult<()> {
        self.write_session(&[])
    }
}
