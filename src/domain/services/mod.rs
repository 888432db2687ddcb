//! Domain Services
//!
//! The tree store owns the forest and every mutation; pick-list building
//! is the pure half of the add-entry flow.

mod candidates;
mod store;

pub use candidates::PickList;
pub use store::{StoreOptions, TreeStore};
