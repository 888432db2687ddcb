//! Console observer
//!
//! Surfaces the store's warning events on stderr, in the wording the
//! original host used. `Changed` is ignored; the CLI redraws explicitly.

use tabgroups::{StoreEvent, StoreObserver};

use crate::ui::theme::icons;

/// Stderr implementation of the `StoreObserver` port
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    pub fn new() -> Self {
        Self
    }
}

impl StoreObserver for ConsoleObserver {
    fn on_event(&self, event: &StoreEvent) {
        match event {
            StoreEvent::Changed => {}
            StoreEvent::DuplicateEntry { path, label, .. } => {
                let shown = path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| label.clone());
                eprintln!(
                    "{} File with path '{}' has already been added to this group.",
                    icons::WARNING,
                    shown
                );
            }
            StoreEvent::OpenFailed { path, error } => {
                eprintln!(
                    "{} Failed to open document '{}': {}",
                    icons::ERROR,
                    path.display(),
                    error
                );
            }
            StoreEvent::CloseFailed { path, error } => {
                eprintln!(
                    "{} Failed to close document '{}': {}",
                    icons::ERROR,
                    path.display(),
                    error
                );
            }
            StoreEvent::CloseAllFailed { error } => {
                eprintln!("{} Failed to close the other editors: {}", icons::ERROR, error);
            }
        }
    }
}
