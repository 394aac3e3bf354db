//! Links from the sync directory into the upstream tree.
//!
//! The host build includes RDKit headers as `<GraphMol/...>`, so every
//! first-level directory below `Code/` gets a link next to the upstream
//! checkout, plus the fixed extra links from the configuration. Anything
//! already present at a link location is left alone, so repeated runs are
//! harmless.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::{FileEntry, FileSet};
use crate::settings::ManifestWarning;
use crate::util::config::SyncConfig;
use crate::util::diagnostic::{emit, Diagnostic};
use crate::util::fs::{path_occupied, symlink};

/// The first directory below the code directory, e.g. `GraphMol` for
/// `Code/GraphMol/SmilesParse/SmilesWrite.cpp`.
///
/// `None` if the path has fewer than three segments.
pub fn top_level_dir(entry: &FileEntry) -> Option<String> {
    let mut parts = entry.path.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s),
        _ => None,
    });
    let _code = parts.next()?;
    let dir = parts.next()?;
    parts.next()?;
    Some(dir.to_string_lossy().into_owned())
}

/// Result of the link step.
#[derive(Debug, Clone, Default)]
pub struct LinkOutcome {
    /// Links created by this run (existing ones are not listed).
    pub created: Vec<PathBuf>,
    /// Entries no link could be derived from.
    pub warnings: Vec<ManifestWarning>,
}

/// Top-level directories referenced by any header or source.
///
/// Entries without one are skipped and returned as warnings.
pub fn referenced_dirs(files: &FileSet) -> (BTreeSet<String>, Vec<ManifestWarning>) {
    let mut dirs = BTreeSet::new();
    let mut warnings = Vec::new();
    for entry in files.entries() {
        match top_level_dir(entry) {
            Some(dir) => {
                dirs.insert(dir);
            }
            None => warnings.push(ManifestWarning::MissingSubdirectory {
                path: entry.slash_path(),
            }),
        }
    }
    (dirs, warnings)
}

fn occupied_note(target: &Path, link: &Path) -> Diagnostic {
    Diagnostic::note("link location exists and is not a link")
        .with_location(link)
        .with_context(format!("leaving it in place of {}", target.display()))
}

/// Create `link` pointing at `target` unless something is already there.
///
/// Returns `true` if a new link was created.
fn ensure_link(target: &Path, link: &Path) -> Result<bool> {
    if path_occupied(link) {
        if link.is_symlink() {
            tracing::debug!("Keeping existing {}", link.display());
        } else {
            emit(&occupied_note(target, link));
        }
        return Ok(false);
    }

    symlink(target, link).with_context(|| {
        format!(
            "failed to link {} -> {}",
            link.display(),
            target.display()
        )
    })?;
    tracing::info!("Linked {} -> {}", link.display(), target.display());
    Ok(true)
}

/// Create the subdirectory and extra links in `base`.
///
/// Link targets are relative to `base`, as written in the configuration.
/// Warnings are returned, not emitted.
pub fn link_subdirs(files: &FileSet, base: &Path, config: &SyncConfig) -> Result<LinkOutcome> {
    let code_root = config.upstream_dir.join(&config.code_dir);
    let (dirs, warnings) = referenced_dirs(files);
    let mut outcome = LinkOutcome {
        created: Vec::new(),
        warnings,
    };

    for dir in dirs {
        let link = base.join(&dir);
        if ensure_link(&code_root.join(&dir), &link)? {
            outcome.created.push(link);
        }
    }

    for extra in &config.extra_links {
        let link = base.join(&extra.link);
        if ensure_link(&config.upstream_dir.join(&extra.source), &link)? {
            outcome.created.push(link);
        }
    }

    Ok(outcome)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::test_support::UpstreamFixture;
    use std::fs;

    fn files(paths: &[&str]) -> FileSet {
        let mut set = FileSet::new();
        for path in paths {
            set.push(FileEntry::source(*path));
        }
        set
    }

    #[test]
    fn test_top_level_dir() {
        let dir = |p: &str| top_level_dir(&FileEntry::header(p));
        assert_eq!(dir("Code/GraphMol/Atom.h"), Some("GraphMol".to_string()));
        assert_eq!(
            dir("Code/GraphMol/SmilesParse/SmilesWrite.cpp"),
            Some("GraphMol".to_string())
        );
        assert_eq!(dir("Code/foo.h"), None);
        assert_eq!(dir("foo.h"), None);
    }

    #[test]
    fn test_referenced_dirs_deduplicates() {
        let set = files(&[
            "Code/GraphMol/Atom.cpp",
            "Code/GraphMol/SmilesParse/x.cpp",
            "Code/RDGeneral/types.cpp",
            "Code/loose.cpp",
        ]);
        let (dirs, warnings) = referenced_dirs(&set);
        let dirs: Vec<_> = dirs.into_iter().collect();
        assert_eq!(dirs, ["GraphMol", "RDGeneral"]);
        assert_eq!(
            warnings,
            [ManifestWarning::MissingSubdirectory {
                path: "Code/loose.cpp".to_string()
            }]
        );
    }

    #[test]
    fn test_occupied_note_names_location() {
        let note = occupied_note(Path::new("rdkit.upstream/Code/GraphMol"), Path::new("base/GraphMol"));
        let text = note.format();
        assert!(text.starts_with("note: link location exists"));
        assert!(text.contains("--> base/GraphMol"));
        assert!(text.contains("= leaving it in place of rdkit.upstream/Code/GraphMol"));
    }

    #[test]
    fn test_links_point_into_upstream() {
        let fixture = UpstreamFixture::rdkit_like().build();
        let set = files(&["Code/GraphMol/Atom.cpp", "Code/RDGeneral/types.cpp"]);

        let outcome = link_subdirs(&set, fixture.base(), &fixture.config()).unwrap();
        assert_eq!(outcome.created.len(), 3);
        assert!(outcome.warnings.is_empty());

        let graphmol = fixture.base().join("GraphMol");
        assert_eq!(
            fs::read_link(&graphmol).unwrap(),
            PathBuf::from("rdkit.upstream/Code/GraphMol")
        );
        assert!(graphmol.join("Atom.cpp").exists());

        let rapidjson = fixture.base().join("rapidjson");
        assert_eq!(
            fs::read_link(&rapidjson).unwrap(),
            PathBuf::from("rdkit.upstream/External/rapidjson-1.1.0/include/rapidjson")
        );
        assert!(rapidjson.join("document.h").exists());
    }

    #[test]
    fn test_linking_twice_is_idempotent() {
        let fixture = UpstreamFixture::rdkit_like().build();
        let set = files(&["Code/GraphMol/Atom.cpp"]);
        let config = fixture.config();

        let first = link_subdirs(&set, fixture.base(), &config).unwrap();
        let second = link_subdirs(&set, fixture.base(), &config).unwrap();

        assert_eq!(first.created.len(), 2);
        assert!(second.created.is_empty());
        assert_eq!(
            fs::read_link(fixture.base().join("GraphMol")).unwrap(),
            PathBuf::from("rdkit.upstream/Code/GraphMol")
        );
    }

    #[test]
    fn test_existing_directory_is_left_alone() {
        let fixture = UpstreamFixture::rdkit_like().build();
        let occupied = fixture.base().join("GraphMol");
        fs::create_dir(&occupied).unwrap();

        let outcome =
            link_subdirs(&files(&["Code/GraphMol/Atom.cpp"]), fixture.base(), &fixture.config())
                .unwrap();

        assert!(!outcome.created.contains(&occupied));
        assert!(fs::symlink_metadata(&occupied).unwrap().is_dir());
    }
}
