//! Domain Entities
//!
//! - `TreeNode` - one node of the group tree, with its structural rules
//! - `TreeDocument` / `NodeRecord` - the persisted shape of the forest

mod document;
mod node;

pub use document::{KeyedSeq, NodeRecord, TreeDocument};
pub use node::{AddOutcome, NodeKind, StructuralViolation, TreeNode};
