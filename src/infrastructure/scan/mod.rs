//! Workspace scanning adapters

mod walk;

pub use walk::WalkScanner;
