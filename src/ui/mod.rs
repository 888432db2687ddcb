//! Console UI for the tabgroups binary
//!
//! Rendering and notification glue only; every decision lives in the
//! library.

pub mod notify;
pub mod theme;
pub mod views;
