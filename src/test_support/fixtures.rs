//! Fixtures for upstream source trees.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::{SourceTree, DESCRIPTION_FILE};
use crate::util::config::SyncConfig;
use crate::util::fs::{relative_path, to_slash};

/// Builder for an upstream tree.
///
/// Paths are relative to the upstream root (e.g. `Code/GraphMol/Atom.cpp`).
#[derive(Debug, Clone, Default)]
pub struct UpstreamFixture {
    files: BTreeMap<PathBuf, String>,
}

impl UpstreamFixture {
    /// Create an empty fixture. The `Code` directory always exists.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a build description in `dir`.
    pub fn description(self, dir: impl AsRef<Path>, contents: &str) -> Self {
        let path = dir.as_ref().join(DESCRIPTION_FILE);
        self.file(path, contents)
    }

    /// Add an arbitrary file.
    pub fn file(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.files.insert(path.into(), contents.to_string());
        self
    }

    /// A small tree shaped like RDKit: a couple of libraries, a Python
    /// wrapper directory, an ignored directory and the SmilesParse
    /// generator placeholders.
    pub fn rdkit_like() -> Self {
        Self::new()
            .description("Code", "add_subdirectory(RDGeneral)\n")
            .description(
                "Code/RDGeneral",
                "rdkit_library(RDGeneral Invariant.cpp types.cpp\n    SHARED)\nrdkit_headers(Invariant.h types.h DEST RDGeneral)\n",
            )
            .file("Code/RDGeneral/Invariant.h", "")
            .file("Code/RDGeneral/types.h", "")
            .file("Code/RDGeneral/Invariant.cpp", "")
            .file("Code/RDGeneral/types.cpp", "")
            .description(
                "Code/GraphMol",
                "rdkit_library(GraphMol Atom.cpp Bond.cpp\n    RDBoostHelpers.cpp\n    LINK_LIBRARIES RDGeneral)\n",
            )
            .file("Code/GraphMol/Atom.h", "")
            .file("Code/GraphMol/Atom.cpp", "")
            .file("Code/GraphMol/Bond.cpp", "")
            .file("Code/GraphMol/detail/internal.hpp", "")
            .description(
                "Code/GraphMol/SmilesParse",
                "rdkit_library(SmilesParse\n    ${BISON_OUTPUT_FILES} ${FLEX_OUTPUT_FILES}\n    SmilesWrite.cpp\n    LINK_LIBRARIES GraphMol)\n",
            )
            .file("Code/GraphMol/SmilesParse/SmilesWrite.cpp", "")
            .file("Code/GraphMol/SmilesParse/SmilesParse.h", "")
            .description(
                "Code/GraphMol/Wrap",
                "rdkit_library(rdchem Wrap.cpp LINK_LIBRARIES GraphMol)\n",
            )
            .description(
                "Code/GraphMol/CIPLabeler",
                "rdkit_library(CIPLabeler CIPLabeler.cpp)\n",
            )
            .file("Code/GraphMol/CIPLabeler/CIPLabeler.h", "")
            .file("External/rapidjson-1.1.0/include/rapidjson/document.h", "")
    }

    /// Write the tree to disk. The upstream root is `<tmp>/rdkit.upstream`.
    pub fn build(self) -> BuiltUpstream {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("rdkit.upstream");
        fs::create_dir_all(root.join("Code")).unwrap();

        for (path, contents) in &self.files {
            let full = root.join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, contents).unwrap();
        }

        BuiltUpstream { tmp, root }
    }
}

/// An upstream tree written to a temporary directory.
#[derive(Debug)]
pub struct BuiltUpstream {
    tmp: TempDir,
    root: PathBuf,
}

impl BuiltUpstream {
    /// Directory the tool runs from (contains `rdkit.upstream`).
    pub fn base(&self) -> &Path {
        self.tmp.path()
    }

    /// The upstream root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn code_root(&self) -> PathBuf {
        self.root.join("Code")
    }

    pub fn tree(&self) -> SourceTree {
        SourceTree::new(&self.root, "Code")
    }

    /// Default configuration, with the settings file written inside the
    /// temporary directory instead of next to it.
    pub fn config(&self) -> SyncConfig {
        SyncConfig {
            settings_path: PathBuf::from("rdkit.external.settings"),
            ..SyncConfig::default()
        }
    }

    /// `path` relative to the upstream root, with `/` separators.
    pub fn relative(&self, path: &Path) -> String {
        to_slash(&relative_path(&self.root, path))
    }
}
