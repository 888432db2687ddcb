//! Command handlers for the tabgroups CLI
//!
//! Each handler resolves its arguments (prompting where the original
//! host would), then drives one store operation.

pub mod context;
pub mod entry;
pub mod group;
pub mod list;
pub mod tabs;
