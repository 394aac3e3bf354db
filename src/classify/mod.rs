//! Classification of the upstream tree into headers and sources.
//!
//! Sources come from the `rdkit_library` declarations of every description
//! directory that is not ignored. Headers come from a full scan of the tree
//! instead: the descriptions only list public headers, and the host build
//! needs the internal ones too.

pub mod policy;

use anyhow::Result;

use crate::cmake::DescriptionParser;
use crate::core::{FileEntry, FileSet, SourceTree};
use crate::scan::scan;

/// Collect, filter and relativize the headers and sources of `tree`.
///
/// Returned paths are relative to the tree root, headers first, each group in
/// sorted scan order.
pub fn classify(tree: &SourceTree) -> Result<FileSet> {
    let parser = DescriptionParser::new();
    let scanned = scan(&tree.code_root())?;

    let mut sources = Vec::new();
    for location in &scanned.locations {
        if let Some(rule) = policy::ignored_directory(location) {
            tracing::debug!("Skipping {} ({})", location.dir().display(), rule.reason);
            continue;
        }

        tracing::info!("Parsing {}", location.dir().display());
        let declared = parser.parse_file(location)?;
        sources.extend(declared.sources);
    }

    let mut files = FileSet::new();
    files.extend(
        scanned
            .headers
            .iter()
            .map(|h| FileEntry::header(tree.relativize(h))),
    );

    for source in &sources {
        let entry = FileEntry::source(tree.relativize(source));
        let path = entry.slash_path();
        if let Some(rule) = policy::source_exclusion(&path) {
            tracing::debug!("Dropping {} ({})", path, rule.reason);
            continue;
        }
        files.push(entry);
    }

    tracing::info!(
        "Found {} headers and {} sources",
        files.headers().count(),
        files.sources().count()
    );

    Ok(files)
}

/// Add the generated parser files that only exist after the upstream
/// code-generation step. Files already present are not added twice.
pub fn add_generated(files: &mut FileSet) {
    let headers = policy::GENERATED_HEADERS.iter().map(FileEntry::header);
    let sources = policy::GENERATED_SOURCES.iter().map(FileEntry::source);

    for entry in headers.chain(sources) {
        if files.insert(entry.clone()) {
            tracing::debug!("Added generated file {}", entry.slash_path());
        }
    }
}
