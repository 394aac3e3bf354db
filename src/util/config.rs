//! Run configuration.
//!
//! Every path the sync touches is resolved against an explicit base directory
//! (normally `main/source/external/rdkit`). The defaults reproduce the fixed
//! layout of the Rosetta tree; an optional `rdkit-sync.toml` in the base
//! directory can override them:
//!
//! ```toml
//! upstream_dir = "rdkit.upstream"
//! code_dir = "Code"
//! settings_path = "../rdkit.external.settings"
//! manifest_prefix = "rdkit"
//!
//! [[extra_links]]
//! source = "External/rapidjson-1.1.0/include/rapidjson"
//! link = "rapidjson"
//! ```
//!
//! Filtering policy is not configurable; see [`crate::classify::policy`].

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::SourceTree;

/// Name of the optional configuration file in the base directory.
pub const CONFIG_FILE: &str = "rdkit-sync.toml";

/// Paths and names used by one sync run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Upstream checkout, relative to the base directory.
    pub upstream_dir: PathBuf,

    /// Library subtree inside the upstream checkout. Also the leading path
    /// segment stripped from manifest entries.
    pub code_dir: PathBuf,

    /// Settings file written for the host build, relative to the base directory.
    pub settings_path: PathBuf,

    /// Prefix of every key in the `sources` mapping.
    pub manifest_prefix: String,

    /// Links created in addition to the per-subdirectory ones.
    pub extra_links: Vec<ExtraLink>,
}

/// A fixed link into the upstream tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLink {
    /// Target, relative to the upstream root.
    pub source: PathBuf,
    /// Link path, relative to the base directory.
    pub link: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            upstream_dir: PathBuf::from("rdkit.upstream"),
            code_dir: PathBuf::from("Code"),
            settings_path: PathBuf::from("../rdkit.external.settings"),
            manifest_prefix: "rdkit".to_string(),
            extra_links: vec![ExtraLink {
                source: PathBuf::from("External/rapidjson-1.1.0/include/rapidjson"),
                link: PathBuf::from("rapidjson"),
            }],
        }
    }
}

impl SyncConfig {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load `rdkit-sync.toml` from `base`, or the defaults if there is none.
    ///
    /// A file that exists but does not parse is an error.
    pub fn load_or_default(base: &Path) -> Result<Self> {
        let path = base.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!("Using config file {}", path.display());
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// The upstream tree as seen from `base`.
    pub fn source_tree(&self, base: &Path) -> SourceTree {
        SourceTree::new(base.join(&self.upstream_dir), &self.code_dir)
    }

    /// Location of the settings file as seen from `base`.
    pub fn settings_file(&self, base: &Path) -> PathBuf {
        base.join(&self.settings_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_rosetta_layout() {
        let config = SyncConfig::default();
        let base = Path::new("/src/external/rdkit");

        assert_eq!(
            config.source_tree(base).code_root(),
            PathBuf::from("/src/external/rdkit/rdkit.upstream/Code")
        );
        assert_eq!(
            config.settings_file(base),
            PathBuf::from("/src/external/rdkit/../rdkit.external.settings")
        );
        assert_eq!(config.extra_links.len(), 1);
        assert_eq!(config.extra_links[0].link, PathBuf::from("rapidjson"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = SyncConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config, SyncConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE),
            "upstream_dir = \"rdkit-2023.09\"\nextra_links = []\n",
        )
        .unwrap();

        let config = SyncConfig::load_or_default(tmp.path()).unwrap();
        assert_eq!(config.upstream_dir, PathBuf::from("rdkit-2023.09"));
        assert_eq!(config.code_dir, PathBuf::from("Code"));
        assert_eq!(config.manifest_prefix, "rdkit");
        assert!(config.extra_links.is_empty());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE), "upstream_dir = [").unwrap();
        assert!(SyncConfig::load_or_default(tmp.path()).is_err());
    }
}
