//! In-memory editor host
//!
//! For embedders wiring their own editor integration and for tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::domain::ports::editor_host::{EditorHost, EditorResult};
use crate::domain::value_objects::OpenTab;

/// Memory-backed implementation of the `EditorHost` port
///
/// Clones share the same tab list.
#[derive(Clone, Default)]
pub struct MemoryEditor {
    tabs: Arc<Mutex<Vec<OpenTab>>>,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with a preset tab snapshot
    pub fn with_tabs(tabs: Vec<OpenTab>) -> Self {
        Self {
            tabs: Arc::new(Mutex::new(tabs)),
        }
    }
}

impl EditorHost for MemoryEditor {
    fn open_tabs(&self) -> Vec<OpenTab> {
        self.tabs.lock().unwrap().clone()
    }

    fn open_file(&self, path: &Path) -> EditorResult<()> {
        let mut tabs = self.tabs.lock().unwrap();
        if tabs.iter().any(|tab| tab.path() == Some(path)) {
            return Ok(());
        }
        tabs.push(OpenTab::file(path.to_string_lossy(), path));
        Ok(())
    }

    fn close_file(&self, path: &Path) -> EditorResult<()> {
        self.tabs
            .lock()
            .unwrap()
            .retain(|tab| tab.path() != Some(path));
        Ok(())
    }

    fn close_all_files(&self) -> EditorResult<()> {
        self.tabs.lock().unwrap().clear();
        Ok(())
    }
}
