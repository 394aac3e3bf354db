//! Test utilities for unit tests.
//!
//! Provides builders that lay out a fake upstream checkout inside a temporary
//! directory.
//!
//! # Example
//!
//! ```rust,ignore
//! let fixture = UpstreamFixture::new()
//!     .description("Code/Geometry", "rdkit_library(RDGeometryLib point.cpp)\n")
//!     .file("Code/Geometry/point.cpp", "")
//!     .build();
//!
//! let result = scan(&fixture.code_root())?;
//! ```

pub mod fixtures;

pub use fixtures::*;
