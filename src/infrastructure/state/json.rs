//! JSON state repository
//!
//! Persists the durable document as one JSON file per workspace under
//! the user data directory, keyed by a hash of the workspace path (the
//! same scoping the original host gives its per-workspace storage).
//! `TABGROUPS_STATE_DIR` overrides the base directory.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::entities::TreeDocument;
use crate::domain::ports::state_store::{StateError, StateResult, StateStore};
use crate::infrastructure::fs::LocalFs;

/// JSON-file implementation of the `StateStore` port
#[derive(Debug, Clone)]
pub struct JsonStateStore {
    path: PathBuf,
    fs: LocalFs,
}

/// Short hex digest identifying one workspace
fn workspace_key(workspace_root: &Path) -> String {
    let canonical = workspace_root
        .canonicalize()
        .unwrap_or_else(|_| workspace_root.to_path_buf());
    let digest = Sha256::digest(canonical.to_string_lossy().as_bytes());
    digest
        .iter()
        .take(8)
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

impl JsonStateStore {
    /// Repository at an explicit document path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fs: LocalFs::new(),
        }
    }

    /// Repository at the workspace's scoped document location
    pub fn for_workspace(workspace_root: &Path) -> StateResult<Self> {
        let base = match std::env::var_os("TABGROUPS_STATE_DIR") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_dir()
                .ok_or(StateError::NoStateDir)?
                .join("tabgroups"),
        };
        let file = format!("{}.json", workspace_key(workspace_root));
        Ok(Self::at_path(base.join("workspaces").join(file)))
    }

    /// Where the document lives
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonStateStore {
    fn load(&self) -> StateResult<Option<TreeDocument>> {
        if !self.fs.exists(&self.path) {
            return Ok(None);
        }
        let content = self.fs.read(&self.path)?;
        let doc = serde_json::from_str(&content)
            .map_err(|e| StateError::InvalidFormat(e.to_string()))?;
        Ok(Some(doc))
    }

    fn save(&self, doc: &TreeDocument) -> StateResult<()> {
        let content = serde_json::to_string_pretty(doc)
            .map_err(|e| StateError::InvalidFormat(e.to_string()))?;
        self.fs.write(&self.path, &content)?;
        Ok(())
    }
}
