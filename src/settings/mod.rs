//! The `rdkit.external.settings` file consumed by the Rosetta SCons build.
//!
//! Sources are grouped by the directory below `Code/` that contains them,
//! keys and file names both sorted, so an unchanged upstream tree always
//! renders to the same bytes.

pub mod errors;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use anyhow::Result;

use crate::core::FileSet;
use crate::util::fs::{to_slash, write_atomic};

pub use errors::ManifestWarning;

/// Extensions of files the host build can compile.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp"];

const HEADER: &str = "\
# -*- mode:python;indent-tabs-mode:t;show-trailing-whitespace:t; -*-
#
# Project settings for rosetta sources
# (c) Copyright Rosetta Commons Member Institutions.
# (c) This file is part of the Rosetta software suite and is made available under license.
# (c) The Rosetta software is developed by the contributing members of the Rosetta Commons.
# (c) For more information, see http://www.rosettacommons.org. Questions about this can be
# (c) addressed to University of Washington UW TechTransfer, email: license@u.washington.edu.

# THIS IS AN AUTOGENERATED FILE. You can edit it, but
# please note any manual alterations in the main/source/external/update_rdkit.py script

sources = {
";

const FOOTER: &str = "
}
include_path = [
]
library_path = [
]
libraries = [
]
subprojects = [
]
";

/// Grouped sources, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    prefix: String,
    sources: BTreeMap<String, BTreeSet<String>>,
}

/// A manifest together with everything that was left out of it.
#[derive(Debug, Clone)]
pub struct GeneratedManifest {
    pub manifest: Manifest,
    pub warnings: Vec<ManifestWarning>,
}

impl Manifest {
    /// Group the sources of `files`.
    ///
    /// `code_dir` is the leading segment every source path must start with;
    /// `prefix` is prepended to every key. Sources directly in `code_dir` (no
    /// subdirectory) and sources without a compilable extension are skipped
    /// with a warning.
    pub fn generate(files: &FileSet, code_dir: &Path, prefix: &str) -> GeneratedManifest {
        let mut manifest = Manifest {
            prefix: prefix.to_string(),
            sources: BTreeMap::new(),
        };
        let mut warnings = Vec::new();

        for entry in files.sources() {
            let path = entry.slash_path();

            let (subdir, name) = match entry.path.strip_prefix(code_dir) {
                Ok(rest) => match (rest.parent(), rest.file_name()) {
                    (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => {
                        (to_slash(dir), name.to_string_lossy().into_owned())
                    }
                    _ => {
                        warnings.push(ManifestWarning::MissingSubdirectory { path });
                        continue;
                    }
                },
                Err(_) => {
                    warnings.push(ManifestWarning::MissingSubdirectory { path });
                    continue;
                }
            };

            let compilable = Path::new(&name)
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e));
            if !compilable {
                warnings.push(ManifestWarning::UnrecognizedExtension { path });
                continue;
            }

            manifest.sources.entry(subdir).or_default().insert(name);
        }

        GeneratedManifest { manifest, warnings }
    }

    /// Subdirectory keys (without prefix) in output order.
    pub fn subdirectories(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// File names grouped under `subdir`, sorted.
    pub fn files(&self, subdir: &str) -> Option<impl Iterator<Item = &str>> {
        self.sources
            .get(subdir)
            .map(|names| names.iter().map(String::as_str))
    }

    /// Number of source files in the manifest.
    pub fn len(&self) -> usize {
        self.sources.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Render the settings document.
    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);

        for (subdir, names) in &self.sources {
            out.push_str(&format!("\t\"{}/{}\" :[\n", self.prefix, subdir));
            for name in names {
                out.push_str(&format!("\t\t\"{}\",\n", name));
            }
            out.push_str("\t],\n");
        }

        out.push_str(FOOTER);
        out
    }

    /// Render and write the settings document to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        write_atomic(path, &self.render())
    }
}
