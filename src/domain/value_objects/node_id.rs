//! Node identifier value object
//!
//! Every tree node gets a stable opaque id at construction time. Ids are
//! process-unique and never persisted; a restored forest is assigned fresh
//! ones. Ownership lookups key on the id instead of the denormalized
//! parent label, so a group rename can never orphan its entries.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a single tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Allocate the next process-unique id
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
