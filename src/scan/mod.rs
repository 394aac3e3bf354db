//! Directory walker over the upstream source subtree.
//!
//! Finds every directory that directly contains a build description, and
//! every header file anywhere in the subtree. Traversal order is whatever the
//! filesystem yields; both lists are sorted before they are returned so that
//! downstream output is stable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::core::{DescriptionLocation, DESCRIPTION_FILE};

/// File extensions recognized as headers.
pub const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp"];

/// Result of walking a subtree.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Directories holding a build description.
    pub locations: Vec<DescriptionLocation>,
    /// Every header under the subtree, description-declared or not.
    pub headers: Vec<PathBuf>,
}

/// Whether a file name carries one of the header extensions.
pub fn is_header(file_name: &str) -> bool {
    HEADER_EXTENSIONS.iter().any(|ext| file_name.ends_with(ext))
}

/// Walk `dir` recursively. Any traversal error aborts the walk.
pub fn scan(dir: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("failed to walk directory: {}", dir.display()))?;
        let path = entry.path();

        if entry.file_type().is_dir() {
            if path.join(DESCRIPTION_FILE).is_file() {
                result.locations.push(DescriptionLocation::new(path));
            }
            continue;
        }

        if is_header(&entry.file_name().to_string_lossy()) {
            result.headers.push(path.to_path_buf());
        }
    }

    result.locations.sort();
    result.headers.sort();

    tracing::debug!(
        "Scanned {}: {} description directories, {} headers",
        dir.display(),
        result.locations.len(),
        result.headers.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::UpstreamFixture;

    #[test]
    fn test_is_header() {
        assert!(is_header("Atom.h"));
        assert!(is_header("smiles.tab.hpp"));
        assert!(!is_header("Atom.cpp"));
        assert!(!is_header("header.hh"));
    }

    #[test]
    fn test_scan_finds_locations_and_headers() {
        let fixture = UpstreamFixture::new()
            .description("Code/Geometry", "rdkit_library(RDGeometryLib point.cpp)\n")
            .file("Code/Geometry/point.h", "")
            .file("Code/Geometry/point.cpp", "")
            .file("Code/Geometry/detail/impl.hpp", "")
            .description("Code/GraphMol", "rdkit_headers(Atom.h)\n")
            .file("Code/README", "")
            .build();

        let result = scan(&fixture.code_root()).unwrap();

        let dirs: Vec<_> = result
            .locations
            .iter()
            .map(|l| fixture.relative(l.dir()))
            .collect();
        assert_eq!(dirs, ["Code/Geometry", "Code/GraphMol"]);

        let headers: Vec<_> = result.headers.iter().map(|h| fixture.relative(h)).collect();
        assert_eq!(
            headers,
            ["Code/Geometry/detail/impl.hpp", "Code/Geometry/point.h"]
        );
    }

    #[test]
    fn test_scan_missing_directory_is_fatal() {
        let fixture = UpstreamFixture::new().build();
        assert!(scan(&fixture.root().join("Nope")).is_err());
    }
}
