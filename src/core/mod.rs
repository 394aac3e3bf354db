//! Core data structures for the RDKit sync.
//!
//! - The upstream tree and its build-description directories
//! - Recognized declarations inside a build description
//! - Classified header and source entries

pub mod declaration;
pub mod file_set;
pub mod source_tree;

pub use declaration::{Declaration, DeclarationKind};
pub use file_set::{FileEntry, FileKind, FileSet};
pub use source_tree::{DescriptionLocation, SourceTree, DESCRIPTION_FILE};
