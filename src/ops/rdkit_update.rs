//! Implementation of a full RDKit sync run.
//!
//! classify → add generated files → link subdirectories → write settings.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::classify::{add_generated, classify};
use crate::core::FileSet;
use crate::ops::link::link_subdirs;
use crate::settings::{Manifest, ManifestWarning};
use crate::util::config::SyncConfig;
use crate::util::diagnostic::emit;

/// Options for a sync run.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// Directory every configured path is resolved against.
    pub base: PathBuf,

    /// Paths and names for this run.
    pub config: SyncConfig,
}

impl UpdateOptions {
    /// Options for `base`, reading `rdkit-sync.toml` there if present.
    pub fn from_base(base: impl Into<PathBuf>) -> Result<Self> {
        let base = base.into();
        let config = SyncConfig::load_or_default(&base)?;
        Ok(UpdateOptions { base, config })
    }
}

/// What a sync run produced.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    /// Final headers and sources, relative to the upstream root.
    pub files: FileSet,
    /// Links created by this run (existing ones are not listed).
    pub links: Vec<PathBuf>,
    /// Files left out of the links or the settings file, each reported once.
    pub warnings: Vec<ManifestWarning>,
    /// Number of sources written to the settings file.
    pub manifest_sources: usize,
    /// Where the settings file was written.
    pub settings_path: PathBuf,
}

/// Run the sync.
pub fn update(opts: &UpdateOptions) -> Result<UpdateReport> {
    let base: &Path = &opts.base;
    let config = &opts.config;

    let tree = config.source_tree(base);
    let mut files = classify(&tree)?;
    add_generated(&mut files);

    let linked = link_subdirs(&files, base, config)?;

    let generated = Manifest::generate(&files, &config.code_dir, &config.manifest_prefix);
    let mut warnings = linked.warnings;
    for warning in generated.warnings {
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }
    for warning in &warnings {
        emit(&warning.to_diagnostic());
    }

    let settings_path = config.settings_file(base);
    generated.manifest.write(&settings_path)?;
    tracing::info!(
        "Wrote {} sources in {} directories to {}",
        generated.manifest.len(),
        generated.manifest.subdirectories().count(),
        settings_path.display()
    );

    Ok(UpdateReport {
        files,
        links: linked.created,
        warnings,
        manifest_sources: generated.manifest.len(),
        settings_path,
    })
}
