//! rdkit-sync - keep Rosetta's vendored copy of RDKit in step with upstream
//!
//! This crate reads the `CMakeLists.txt` files of an RDKit checkout to find
//! the sources that are actually compiled, scans for every header, applies a
//! fixed filtering policy and writes the settings file the Rosetta SCons
//! build compiles RDKit from.

pub mod classify;
pub mod cmake;
pub mod core;
pub mod ops;
pub mod scan;
pub mod settings;
pub mod util;

/// Test utilities for unit tests.
///
/// This module is only available when compiling with `--cfg test`. It lays
/// out fake upstream trees in temporary directories.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{Declaration, DeclarationKind, FileEntry, FileKind, FileSet, SourceTree};
pub use settings::Manifest;
pub use util::config::SyncConfig;
