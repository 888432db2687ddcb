//! Tree node entity
//!
//! One node of the two-level group tree: a root-level group or a file
//! entry inside one. Structural rules (depth limit, duplicate
//! suppression, parent back-reference) live here; the store composes
//! nodes into the forest and handles persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::document::NodeRecord;
use crate::domain::value_objects::{GroupIcon, NodeId};

/// What a node is; fixed at construction, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    Group,
    Entry,
}

/// Outcome of [`TreeNode::add_child`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The child was appended
    Added,
    /// A child with the same identity already existed; the new one was
    /// discarded
    Duplicate,
}

/// Programming-contract violation in the tree model
///
/// These indicate a bug in the caller, not bad user input, and are never
/// silently absorbed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralViolation {
    /// Children may only be added to groups (depth limit)
    #[error("can not add a child to entry item '{label}'")]
    ChildOfEntry { label: String },

    /// Parent labels belong to entries only
    #[error("can not assign a parent label to group item '{label}'")]
    ParentLabelOnGroup { label: String },

    /// Icons belong to groups only
    #[error("can not set an icon on entry item '{label}'")]
    IconOnEntry { label: String },
}

/// One node of the tab group tree
///
/// Identity for matching purposes is the `(label, file_path)` pair; the
/// [`NodeId`] is a stable handle for callers holding a reference across
/// mutations.
#[derive(Debug)]
pub struct TreeNode {
    id: NodeId,
    label: String,
    kind: NodeKind,
    file_path: Option<PathBuf>,
    children: Vec<TreeNode>,
    parent_label: Option<String>,
    icon: Option<GroupIcon>,
    expanded: bool,
}

impl TreeNode {
    fn from_parts(label: String, kind: NodeKind, file_path: Option<PathBuf>) -> Self {
        Self {
            id: NodeId::next(),
            label,
            kind,
            file_path,
            children: Vec::new(),
            parent_label: None,
            icon: None,
            expanded: false,
        }
    }

    /// Create a root-level group node
    pub fn group(label: impl Into<String>) -> Self {
        Self::from_parts(label.into(), NodeKind::Group, None)
    }

    /// Create a file entry node
    pub fn entry(label: impl Into<String>, file_path: impl Into<PathBuf>) -> Self {
        Self::from_parts(label.into(), NodeKind::Entry, Some(file_path.into()))
    }

    /// Create an entry with no backing file (a tab that is not
    /// file-backed); open/close skip such entries
    pub fn entry_unbacked(label: impl Into<String>) -> Self {
        Self::from_parts(label.into(), NodeKind::Entry, None)
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_group(&self) -> bool {
        self.kind == NodeKind::Group
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn parent_label(&self) -> Option<&str> {
        self.parent_label.as_deref()
    }

    pub fn icon(&self) -> Option<GroupIcon> {
        self.icon
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub(crate) fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub(crate) fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<TreeNode> {
        &mut self.children
    }

    /// Set the owning group's label on an entry
    pub fn set_parent_label(
        &mut self,
        label: impl Into<String>,
    ) -> Result<(), StructuralViolation> {
        if self.is_group() {
            return Err(StructuralViolation::ParentLabelOnGroup {
                label: self.label.clone(),
            });
        }
        self.parent_label = Some(label.into());
        Ok(())
    }

    /// Set the palette icon on a group
    pub fn set_icon(&mut self, icon: GroupIcon) -> Result<(), StructuralViolation> {
        if !self.is_group() {
            return Err(StructuralViolation::IconOnEntry {
                label: self.label.clone(),
            });
        }
        self.icon = Some(icon);
        Ok(())
    }

    /// Identity match: equal `(label, file_path)` pair
    pub fn same_identity(&self, other: &TreeNode) -> bool {
        self.label == other.label && self.file_path == other.file_path
    }

    /// Position of a child matching `other`'s identity
    pub fn child_index_of(&self, other: &TreeNode) -> Option<usize> {
        self.children.iter().position(|c| c.same_identity(other))
    }

    /// Check for a child matching `other`'s identity
    pub fn has_child(&self, other: &TreeNode) -> bool {
        self.child_index_of(other).is_some()
    }

    /// Append a child to a group
    ///
    /// Duplicate identities are discarded with `AddOutcome::Duplicate`;
    /// the caller decides how to surface that. On an actual append the
    /// node is marked expanded.
    pub fn add_child(&mut self, child: TreeNode) -> Result<AddOutcome, StructuralViolation> {
        if !self.is_group() {
            return Err(StructuralViolation::ChildOfEntry {
                label: self.label.clone(),
            });
        }

        if self.has_child(&child) {
            return Ok(AddOutcome::Duplicate);
        }

        self.children.push(child);
        self.expanded = true;
        Ok(AddOutcome::Added)
    }

    /// Remove the child matching `other`'s identity
    ///
    /// Returns whether a removal happened.
    pub fn remove_child(&mut self, other: &TreeNode) -> bool {
        match self.child_index_of(other) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    /// Convert this node (and its subtree) into the wire shape
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            label: self.label.clone(),
            file: self.file_path.clone(),
            kind: self.kind,
            icon: self.icon,
            children: self.children.iter().map(TreeNode::to_record).collect(),
            parent_label: self.parent_label.clone(),
        }
    }

    /// Rebuild a node tree from the wire shape
    ///
    /// Children are re-added through [`TreeNode::add_child`] so the
    /// duplicate-suppression and expanded-state rules re-apply on load.
    /// A record that nests children under an entry is structurally
    /// malformed and fails loudly.
    pub fn from_record(record: NodeRecord) -> Result<Self, StructuralViolation> {
        let mut node = Self::from_parts(record.label, record.kind, record.file);

        if node.is_group() {
            node.icon = record.icon;
        } else if let Some(parent) = record.parent_label {
            node.set_parent_label(parent)?;
        }

        for child_record in record.children {
            let child = TreeNode::from_record(child_record)?;
            let _ = node.add_child(child)?;
        }

        Ok(node)
    }
}

#[cfg(test)]
mod tests;
