//! Recoverable anomalies found while grouping sources.

use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// A source left out of the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestWarning {
    #[error("cannot find the subdirectory of `{path}`")]
    MissingSubdirectory { path: String },

    #[error("non-standard extension on source `{path}`, ignoring")]
    UnrecognizedExtension { path: String },
}

impl ManifestWarning {
    /// The offending path, as given to the generator.
    pub fn path(&self) -> &str {
        match self {
            ManifestWarning::MissingSubdirectory { path }
            | ManifestWarning::UnrecognizedExtension { path } => path,
        }
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::warning(self.to_string());
        match self {
            ManifestWarning::MissingSubdirectory { .. } => {
                diag.with_suggestion(suggestions::NO_SUBDIRECTORY)
            }
            ManifestWarning::UnrecognizedExtension { .. } => diag
                .with_context(format!(
                    "recognized extensions: {}",
                    super::SOURCE_EXTENSIONS
                        .iter()
                        .map(|e| format!(".{}", e))
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
                .with_suggestion(suggestions::NOT_COMPILABLE),
        }
    }
}
