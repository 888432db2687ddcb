//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod group_icon;
mod ignore_patterns;
mod node_id;
mod open_tab;

pub use group_icon::GroupIcon;
pub use ignore_patterns::{IgnoreError, IgnorePatterns};
pub use node_id::NodeId;
pub use open_tab::{FileCandidate, OpenTab};
