//! Error types for tabgroups
//!
//! Uses `thiserror` for the crate-level enum; each variant maps to one
//! class of failure the store can surface.

use thiserror::Error;

use crate::domain::entities::StructuralViolation;
use crate::domain::ports::state_store::StateError;

/// Result type alias for tabgroups operations
pub type TabGroupsResult<T> = Result<T, TabGroupsError>;

/// Main error type for tabgroups operations
///
/// User-input and precondition variants abort an operation before any
/// mutation; structural variants indicate a caller bug and fail loudly.
#[derive(Error, Debug)]
pub enum TabGroupsError {
    /// Group name was empty or whitespace-only
    #[error("a tab group needs a non-empty name")]
    EmptyGroupName,

    /// Another root group already uses this label
    #[error("can not have two tab groups with name '{name}'")]
    DuplicateGroupName { name: String },

    /// Move-up requested on the first item of its sequence
    #[error("'{label}' is already at the top of its group")]
    AlreadyFirst { label: String },

    /// Move-down requested on the last item of its sequence
    #[error("'{label}' is already at the bottom of its group")]
    AlreadyLast { label: String },

    /// Tab-order sync found no open tab matching any entry
    #[error("none of the entries in '{group}' are currently open")]
    NoOpenEntries { group: String },

    /// No workspace folder could be determined
    #[error("no workspace has been found")]
    NoWorkspace,

    /// Programming-contract violation in the tree model
    #[error(transparent)]
    Structural(#[from] StructuralViolation),

    /// Persisting or restoring the durable document failed
    #[error("tab group state error: {0}")]
    State(#[from] StateError),

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig {
        file: std::path::PathBuf,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
