//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer. The host (or
//! the infrastructure layer) provides concrete implementations.

pub mod editor_host;
pub mod prompter;
pub mod state_store;
pub mod store_events;
pub mod workspace_scanner;

pub use editor_host::{EditorError, EditorHost, EditorResult};
pub use prompter::{PromptError, PromptResult, Prompter};
pub use state_store::{StateError, StateResult, StateStore};
pub use store_events::{NoopObserver, StoreEvent, StoreObserver};
pub use workspace_scanner::{ScanError, ScanResult, WorkspaceScanner};
