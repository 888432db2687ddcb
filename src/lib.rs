//! tabgroups - persistent tab groups for editor workspaces
//!
//! Organizes files into named, ordered groups that survive restarts: an
//! in-memory tree of groups and entries, a store that mutates and
//! persists it as one durable document per workspace, and narrow ports
//! for everything host-specific (prompts, editor calls, scanning,
//! storage).

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{
    AddOutcome, NodeKind, NodeRecord, StructuralViolation, TreeDocument, TreeNode,
};
pub use domain::ports::{
    EditorError, EditorHost, NoopObserver, PromptError, Prompter, ScanError, StateError,
    StateStore, StoreEvent, StoreObserver, WorkspaceScanner,
};
pub use domain::services::{PickList, StoreOptions, TreeStore};
pub use domain::value_objects::{FileCandidate, GroupIcon, IgnorePatterns, NodeId, OpenTab};
pub use error::{TabGroupsError, TabGroupsResult};
