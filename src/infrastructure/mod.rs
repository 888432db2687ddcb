//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: local persistence,
//! console prompts, workspace scanning, and editor-session adapters.

pub mod editor;
pub mod fs;
pub mod prompt;
pub mod scan;
pub mod state;

pub use editor::{MemoryEditor, SessionFileEditor};
pub use fs::LocalFs;
pub use prompt::ConsolePrompter;
pub use scan::WalkScanner;
pub use state::{JsonStateStore, MemoryStateStore};
