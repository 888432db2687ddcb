//! Tree store service
//!
//! Owns the ordered forest of groups, applies every mutation, and keeps
//! the durable document and the observers in step: each successful
//! mutation notifies the observer list synchronously, then rewrites the
//! persisted document whole (write-through).
//!
//! User-input and precondition failures abort before any mutation; per
//! item failures inside a batch are reported through the observers and
//! never abort the rest of the batch.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::entities::{StructuralViolation, TreeDocument, TreeNode};
use crate::domain::ports::editor_host::EditorHost;
use crate::domain::ports::state_store::StateStore;
use crate::domain::ports::store_events::{StoreEvent, StoreObserver};
use crate::domain::value_objects::{FileCandidate, GroupIcon, NodeId};
use crate::error::{TabGroupsError, TabGroupsResult};

/// Read-only policy inputs for the store
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Close every other editor before opening a group
    pub close_others_on_open: bool,
    /// Levels expanded by expand-all (0 disables it)
    pub expand_depth: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            close_others_on_open: false,
            expand_depth: 2,
        }
    }
}

/// The ordered forest of tab groups and its mutation surface
pub struct TreeStore<S: StateStore, E: EditorHost> {
    forest: Vec<TreeNode>,
    state: S,
    editor: E,
    options: StoreOptions,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl<S: StateStore, E: EditorHost> TreeStore<S, E> {
    /// Create an empty store; call [`TreeStore::restore`] before
    /// dispatching any command.
    pub fn new(state: S, editor: E, options: StoreOptions) -> Self {
        Self {
            forest: Vec::new(),
            state,
            editor,
            options,
            observers: Vec::new(),
        }
    }

    /// Register an observer; notified synchronously, in registration
    /// order, after every successful mutation.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The injected editor host (pick-list building reads tabs from it)
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// The root-level groups, in display order
    pub fn forest(&self) -> &[TreeNode] {
        &self.forest
    }

    pub fn is_empty(&self) -> bool {
        self.forest.is_empty()
    }

    /// Exact, case-sensitive root-label check
    pub fn label_exists(&self, label: &str) -> bool {
        self.index_of_group(label).is_some()
    }

    /// Position of the root group with this label
    pub fn index_of_group(&self, label: &str) -> Option<usize> {
        self.forest.iter().position(|g| g.label() == label)
    }

    /// The root group with this label
    pub fn find_group(&self, label: &str) -> Option<&TreeNode> {
        self.index_of_group(label).map(|i| &self.forest[i])
    }

    /// Any node, group or entry, by id
    pub fn find(&self, id: NodeId) -> Option<&TreeNode> {
        if let Some(pos) = self.group_pos(id) {
            return Some(&self.forest[pos]);
        }
        self.entry_pos(id)
            .map(|(group, child)| &self.forest[group].children()[child])
    }

    /// The group owning an entry, located structurally by id
    pub fn parent_of(&self, id: NodeId) -> Option<&TreeNode> {
        self.entry_pos(id).map(|(group, _)| &self.forest[group])
    }

    fn group_pos(&self, id: NodeId) -> Option<usize> {
        self.forest.iter().position(|g| g.id() == id)
    }

    fn entry_pos(&self, id: NodeId) -> Option<(usize, usize)> {
        self.forest.iter().enumerate().find_map(|(g, group)| {
            group
                .children()
                .iter()
                .position(|c| c.id() == id)
                .map(|c| (g, c))
        })
    }

    fn emit(&self, event: StoreEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }

    /// Notify + write through after a successful mutation
    fn committed(&mut self) -> TabGroupsResult<()> {
        self.emit(StoreEvent::Changed);
        self.persist()
    }

    /// Create a new group; the sole creation path for groups
    pub fn add_group(&mut self, name: &str) -> TabGroupsResult<NodeId> {
        if name.is_empty() {
            return Err(TabGroupsError::EmptyGroupName);
        }
        if self.label_exists(name) {
            return Err(TabGroupsError::DuplicateGroupName {
                name: name.to_string(),
            });
        }

        let group = TreeNode::group(name);
        let id = group.id();
        self.forest.push(group);
        self.committed()?;
        Ok(id)
    }

    /// Remove a group and all its entries; no-op when the id is stale
    pub fn remove_group(&mut self, id: NodeId) -> TabGroupsResult<()> {
        match self.group_pos(id) {
            Some(pos) => {
                self.forest.remove(pos);
                self.committed()
            }
            None => Ok(()),
        }
    }

    /// Remove every group
    pub fn remove_all_groups(&mut self) -> TabGroupsResult<()> {
        if self.forest.is_empty() {
            return Ok(());
        }
        self.forest.clear();
        self.committed()
    }

    /// Rename a group, propagating the new label to every child entry's
    /// parent back-reference
    pub fn rename_group(&mut self, id: NodeId, new_name: &str) -> TabGroupsResult<()> {
        let Some(pos) = self.group_pos(id) else {
            return Ok(());
        };
        if new_name.is_empty() {
            return Err(TabGroupsError::EmptyGroupName);
        }
        let collides = self
            .forest
            .iter()
            .enumerate()
            .any(|(i, g)| i != pos && g.label() == new_name);
        if collides {
            return Err(TabGroupsError::DuplicateGroupName {
                name: new_name.to_string(),
            });
        }

        let group = &mut self.forest[pos];
        group.set_label(new_name);
        for child in group.children_mut() {
            child.set_parent_label(new_name)?;
        }
        self.committed()
    }

    /// Set a group's palette icon
    pub fn set_group_icon(&mut self, id: NodeId, icon: GroupIcon) -> TabGroupsResult<()> {
        if let Some(pos) = self.group_pos(id) {
            self.forest[pos].set_icon(icon)?;
            return self.committed();
        }
        if let Some((group, child)) = self.entry_pos(id) {
            let label = self.forest[group].children()[child].label().to_string();
            return Err(StructuralViolation::IconOnEntry { label }.into());
        }
        Ok(())
    }

    /// Add a batch of selected files as entries of a group
    ///
    /// Duplicates are reported per item and skipped; the batch continues.
    pub fn add_entries(
        &mut self,
        id: NodeId,
        candidates: Vec<FileCandidate>,
    ) -> TabGroupsResult<()> {
        let Some(pos) = self.group_pos(id) else {
            return Ok(());
        };
        let group_label = self.forest[pos].label().to_string();

        let mut mutated = false;
        for candidate in candidates {
            let mut entry = TreeNode::entry(&candidate.label, &candidate.path);
            entry.set_parent_label(&group_label)?;
            if self.attach(pos, &group_label, entry)? {
                mutated = true;
            }
        }

        if mutated {
            self.committed()?;
        }
        Ok(())
    }

    /// Add every currently open tab to a group
    ///
    /// Tabs without a backing file become path-less entries; open/close
    /// skip them later.
    pub fn add_all_open_tabs(&mut self, id: NodeId) -> TabGroupsResult<()> {
        let Some(pos) = self.group_pos(id) else {
            return Ok(());
        };
        let group_label = self.forest[pos].label().to_string();
        let tabs = self.editor.open_tabs();

        let mut mutated = false;
        for tab in tabs {
            let mut entry = match tab.path() {
                Some(path) => TreeNode::entry(tab.label(), path),
                None => TreeNode::entry_unbacked(tab.label()),
            };
            entry.set_parent_label(&group_label)?;
            if self.attach(pos, &group_label, entry)? {
                mutated = true;
            }
        }

        if mutated {
            self.committed()?;
        }
        Ok(())
    }

    /// Add one entry to the group at `pos`, surfacing duplicates through
    /// the observers; returns whether an append happened
    fn attach(
        &mut self,
        pos: usize,
        group_label: &str,
        entry: TreeNode,
    ) -> TabGroupsResult<bool> {
        use crate::domain::entities::AddOutcome;

        let label = entry.label().to_string();
        let path = entry.file_path().map(PathBuf::from);
        match self.forest[pos].add_child(entry)? {
            AddOutcome::Added => Ok(true),
            AddOutcome::Duplicate => {
                self.emit(StoreEvent::DuplicateEntry {
                    group: group_label.to_string(),
                    label,
                    path,
                });
                Ok(false)
            }
        }
    }

    /// Remove one entry from its owning group; no-op when the id is stale
    pub fn remove_entry(&mut self, id: NodeId) -> TabGroupsResult<()> {
        match self.entry_pos(id) {
            Some((group, child)) => {
                self.forest[group].children_mut().remove(child);
                self.committed()
            }
            None => Ok(()),
        }
    }

    /// Reorder a group's entries to match the open-tab order
    ///
    /// Entries with no open match keep their relative order and go after
    /// the matched ones. Groups of 0 or 1 entries are silently left
    /// alone.
    pub fn sync_group_to_open_tabs(&mut self, id: NodeId) -> TabGroupsResult<()> {
        let Some(pos) = self.group_pos(id) else {
            return Ok(());
        };
        if self.forest[pos].children().len() <= 1 {
            return Ok(());
        }

        let tabs = self.editor.open_tabs();
        let rank_of = |label: &str| tabs.iter().position(|tab| tab.label() == label);

        let any_open = self.forest[pos]
            .children()
            .iter()
            .any(|child| rank_of(child.label()).is_some());
        if !any_open {
            return Err(TabGroupsError::NoOpenEntries {
                group: self.forest[pos].label().to_string(),
            });
        }

        let children = std::mem::take(self.forest[pos].children_mut());
        let mut matched: Vec<(usize, TreeNode)> = Vec::new();
        let mut unmatched: Vec<TreeNode> = Vec::new();
        for child in children {
            match rank_of(child.label()) {
                Some(rank) => matched.push((rank, child)),
                None => unmatched.push(child),
            }
        }
        // Stable sort keeps the relative order of entries sharing a label.
        matched.sort_by_key(|(rank, _)| *rank);

        let reordered = self.forest[pos].children_mut();
        reordered.extend(matched.into_iter().map(|(_, child)| child));
        reordered.extend(unmatched);

        self.committed()
    }

    /// Move a group or entry one slot towards the front of its sequence
    pub fn move_up(&mut self, id: NodeId) -> TabGroupsResult<()> {
        if let Some(pos) = self.group_pos(id) {
            if pos == 0 {
                return Err(TabGroupsError::AlreadyFirst {
                    label: self.forest[pos].label().to_string(),
                });
            }
            self.forest.swap(pos, pos - 1);
            return self.committed();
        }
        if let Some((group, child)) = self.entry_pos(id) {
            if child == 0 {
                return Err(TabGroupsError::AlreadyFirst {
                    label: self.forest[group].children()[child].label().to_string(),
                });
            }
            self.forest[group].children_mut().swap(child, child - 1);
            return self.committed();
        }
        Ok(())
    }

    /// Move a group or entry one slot towards the back of its sequence
    pub fn move_down(&mut self, id: NodeId) -> TabGroupsResult<()> {
        if let Some(pos) = self.group_pos(id) {
            if pos + 1 == self.forest.len() {
                return Err(TabGroupsError::AlreadyLast {
                    label: self.forest[pos].label().to_string(),
                });
            }
            self.forest.swap(pos, pos + 1);
            return self.committed();
        }
        if let Some((group, child)) = self.entry_pos(id) {
            if child + 1 == self.forest[group].children().len() {
                return Err(TabGroupsError::AlreadyLast {
                    label: self.forest[group].children()[child].label().to_string(),
                });
            }
            self.forest[group].children_mut().swap(child, child + 1);
            return self.committed();
        }
        Ok(())
    }

    /// Open every entry of a group, in declaration order, best-effort
    ///
    /// With the close-others policy enabled, the rest of the editor is
    /// cleared first. One file failing to open does not stop the rest.
    pub fn open_group(&mut self, id: NodeId) -> TabGroupsResult<()> {
        let Some(pos) = self.group_pos(id) else {
            return Ok(());
        };

        if self.options.close_others_on_open {
            if let Err(err) = self.editor.close_all_files() {
                self.emit(StoreEvent::CloseAllFailed {
                    error: err.to_string(),
                });
            }
        }

        for child in self.forest[pos].children() {
            let Some(path) = child.file_path() else {
                continue;
            };
            if let Err(err) = self.editor.open_file(path) {
                self.emit(StoreEvent::OpenFailed {
                    path: path.to_path_buf(),
                    error: err.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Close every entry of a group that is currently open
    pub fn close_group(&mut self, id: NodeId) -> TabGroupsResult<()> {
        let Some(pos) = self.group_pos(id) else {
            return Ok(());
        };

        let open_paths: HashSet<PathBuf> = self
            .editor
            .open_tabs()
            .iter()
            .filter_map(|tab| tab.path().map(PathBuf::from))
            .collect();

        for child in self.forest[pos].children() {
            let Some(path) = child.file_path() else {
                continue;
            };
            if !open_paths.contains(path) {
                continue;
            }
            if let Err(err) = self.editor.close_file(path) {
                self.emit(StoreEvent::CloseFailed {
                    path: path.to_path_buf(),
                    error: err.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Open a single entry's file
    pub fn open_entry(&mut self, id: NodeId) -> TabGroupsResult<()> {
        let Some((group, child)) = self.entry_pos(id) else {
            return Ok(());
        };
        let Some(path) = self.forest[group].children()[child].file_path() else {
            return Ok(());
        };
        if let Err(err) = self.editor.open_file(path) {
            self.emit(StoreEvent::OpenFailed {
                path: path.to_path_buf(),
                error: err.to_string(),
            });
        }
        Ok(())
    }

    /// Close a single entry's file if it is open
    pub fn close_entry(&mut self, id: NodeId) -> TabGroupsResult<()> {
        let Some((group, child)) = self.entry_pos(id) else {
            return Ok(());
        };
        let Some(path) = self.forest[group].children()[child].file_path() else {
            return Ok(());
        };
        let is_open = self
            .editor
            .open_tabs()
            .iter()
            .any(|tab| tab.path() == Some(path));
        if !is_open {
            return Ok(());
        }
        if let Err(err) = self.editor.close_file(path) {
            self.emit(StoreEvent::CloseFailed {
                path: path.to_path_buf(),
                error: err.to_string(),
            });
        }
        Ok(())
    }

    /// Expand groups for display, up to the configured depth
    ///
    /// Display state only: notifies, but does not persist.
    pub fn expand_all(&mut self) {
        if self.options.expand_depth == 0 {
            return;
        }
        for group in &mut self.forest {
            group.set_expanded(true);
        }
        self.emit(StoreEvent::Changed);
    }

    /// Collapse every group for display
    pub fn collapse_all(&mut self) {
        for group in &mut self.forest {
            group.set_expanded(false);
        }
        self.emit(StoreEvent::Changed);
    }

    /// Serialize the whole forest into the durable document
    pub fn persist(&self) -> TabGroupsResult<()> {
        let doc = TreeDocument::from_forest(&self.forest);
        self.state.save(&doc)?;
        Ok(())
    }

    /// Replace the in-memory forest from the durable document
    ///
    /// Called exactly once, at startup, before any command dispatch. A
    /// missing document yields an empty forest.
    pub fn restore(&mut self) -> TabGroupsResult<()> {
        self.forest = match self.state.load()? {
            Some(doc) => doc.into_forest()?,
            None => Vec::new(),
        };
        self.emit(StoreEvent::Changed);
        Ok(())
    }
}
