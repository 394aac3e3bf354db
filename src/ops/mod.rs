//! High-level operations.
//!
//! This module contains the steps of a sync run.

pub mod link;
pub mod rdkit_update;

pub use link::{link_subdirs, LinkOutcome};
pub use rdkit_update::{update, UpdateOptions, UpdateReport};
