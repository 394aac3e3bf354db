//! Reading RDKit's `CMakeLists.txt` files.
//!
//! This is not a CMake interpreter: only the `rdkit_library` and
//! `rdkit_headers` statements are recognized, see [`crate::core::declaration`].

pub mod parser;

pub use parser::{parse_declarations, DeclaredFiles, DescriptionParser};
