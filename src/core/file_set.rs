//! Classified files, relative to the upstream root.

use std::path::{Path, PathBuf};

use crate::util::fs::to_slash;

/// Whether a file is compiled or only included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Header,
    Source,
}

/// A single classified file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileEntry {
    /// Path relative to the upstream root (e.g. `Code/GraphMol/Atom.cpp`).
    pub path: PathBuf,
    pub kind: FileKind,
}

impl FileEntry {
    pub fn header(path: impl Into<PathBuf>) -> Self {
        FileEntry {
            path: path.into(),
            kind: FileKind::Header,
        }
    }

    pub fn source(path: impl Into<PathBuf>) -> Self {
        FileEntry {
            path: path.into(),
            kind: FileKind::Source,
        }
    }

    /// The path with `/` separators, as matched by policy rules and written to
    /// the settings file.
    pub fn slash_path(&self) -> String {
        to_slash(&self.path)
    }
}

/// Ordered collection of headers and sources for one run.
#[derive(Debug, Clone, Default)]
pub struct FileSet {
    entries: Vec<FileEntry>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, keeping duplicates.
    pub fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Append an entry unless an identical one is already present.
    ///
    /// Returns `true` if the entry was added.
    pub fn insert(&mut self, entry: FileEntry) -> bool {
        if self.contains(&entry.path, entry.kind) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn contains(&self, path: &Path, kind: FileKind) -> bool {
        self.entries
            .iter()
            .any(|e| e.kind == kind && e.path == path)
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn headers(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.kind == FileKind::Header)
    }

    pub fn sources(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(|e| e.kind == FileKind::Source)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<FileEntry> for FileSet {
    fn extend<I: IntoIterator<Item = FileEntry>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
