//! The upstream checkout and the directories inside it that carry a build
//! description.

use std::path::{Path, PathBuf};

use crate::util::fs::relative_path;

/// File name of a build description inside an upstream directory.
pub const DESCRIPTION_FILE: &str = "CMakeLists.txt";

/// Root of the vendored upstream project.
#[derive(Debug, Clone)]
pub struct SourceTree {
    root: PathBuf,
    code_dir: PathBuf,
}

impl SourceTree {
    /// Create a source tree rooted at `root`, whose library sources live under
    /// `root/code_dir`.
    pub fn new(root: impl Into<PathBuf>, code_dir: impl Into<PathBuf>) -> Self {
        SourceTree {
            root: root.into(),
            code_dir: code_dir.into(),
        }
    }

    /// The upstream root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute-or-relative path of the scanned subtree.
    pub fn code_root(&self) -> PathBuf {
        self.root.join(&self.code_dir)
    }

    /// Strip the root prefix from a path discovered inside this tree.
    pub fn relativize(&self, path: &Path) -> PathBuf {
        relative_path(&self.root, path)
    }
}

/// A directory that directly contains a build description.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescriptionLocation {
    dir: PathBuf,
}

impl DescriptionLocation {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DescriptionLocation { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the build description file itself.
    pub fn description_file(&self) -> PathBuf {
        self.dir.join(DESCRIPTION_FILE)
    }

    /// Whether the directory path ends with `suffix`, compared component-wise.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.dir.ends_with(suffix)
    }
}
