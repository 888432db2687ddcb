//! In-memory state repository
//!
//! For embedders that manage persistence themselves, and for tests.

use std::sync::{Arc, Mutex};

use crate::domain::entities::TreeDocument;
use crate::domain::ports::state_store::{StateResult, StateStore};

#[derive(Default)]
struct Cell {
    doc: Option<TreeDocument>,
    saves: usize,
}

/// Memory-backed implementation of the `StateStore` port
///
/// Clones share the same cell, so a test can hold a handle while the
/// store owns another.
#[derive(Clone, Default)]
pub struct MemoryStateStore {
    cell: Arc<Mutex<Cell>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved document, if any
    pub fn document(&self) -> Option<TreeDocument> {
        self.cell.lock().unwrap().doc.clone()
    }

    /// How many times `save` ran
    pub fn save_count(&self) -> usize {
        self.cell.lock().unwrap().saves
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self) -> StateResult<Option<TreeDocument>> {
        Ok(self.cell.lock().unwrap().doc.clone())
    }

    fn save(&self, doc: &TreeDocument) -> StateResult<()> {
        let mut cell = self.cell.lock().unwrap();
        cell.doc = Some(doc.clone());
        cell.saves += 1;
        Ok(())
    }
}
