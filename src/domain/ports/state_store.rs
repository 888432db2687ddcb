//! StateStore port - abstraction for durable-document persistence
//!
//! The store serializes its whole forest into one document per workspace;
//! this trait hides where and how that document lives.

use crate::domain::entities::TreeDocument;

/// Result type for state operations
pub type StateResult<T> = Result<T, StateError>;

/// Durable-document operation errors
#[derive(Debug)]
pub enum StateError {
    /// The persisted document could not be parsed
    InvalidFormat(String),
    /// No usable state directory could be resolved
    NoStateDir,
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::InvalidFormat(msg) => write!(f, "invalid tab group document: {}", msg),
            StateError::NoStateDir => write!(f, "no state directory available"),
            StateError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for StateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StateError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StateError {
    fn from(err: std::io::Error) -> Self {
        StateError::Io(err)
    }
}

/// Abstract repository for the durable document
///
/// The document is always written whole; there is no partial update.
pub trait StateStore {
    /// Load the persisted document, `None` if none was ever written
    fn load(&self) -> StateResult<Option<TreeDocument>>;

    /// Replace the persisted document
    fn save(&self, doc: &TreeDocument) -> StateResult<()>;
}
