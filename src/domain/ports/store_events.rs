//! Store event port
//!
//! The store keeps an explicit observer list and notifies it synchronously
//! after each successful mutation; per-item warnings and best-effort I/O
//! failures travel the same channel so batch operations never abort on
//! them.

use std::path::PathBuf;

/// Event emitted by the tree store
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// The forest changed; rendering collaborators should refresh
    Changed,

    /// An entry with this identity was already in the group; the add was
    /// discarded
    DuplicateEntry {
        group: String,
        label: String,
        path: Option<PathBuf>,
    },

    /// Opening one file failed; the rest of the batch continues
    OpenFailed { path: PathBuf, error: String },

    /// Closing one file failed; the rest of the batch continues
    CloseFailed { path: PathBuf, error: String },

    /// The close-others policy failed to clear the editor
    CloseAllFailed { error: String },
}

/// Trait for receiving store events
///
/// Implementations can be:
/// - a tree renderer reacting to `Changed`
/// - a console notifier surfacing the warning variants
/// - `NoopObserver` for silent embedding
pub trait StoreObserver {
    /// Handle one event
    fn on_event(&self, event: &StoreEvent);
}

/// No-op observer for silent operation
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
    fn on_event(&self, _event: &StoreEvent) {
        // Do nothing
    }
}
