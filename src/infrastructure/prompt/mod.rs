//! User-prompt adapters

mod console;

pub use console::ConsolePrompter;
