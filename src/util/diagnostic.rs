//! User-facing diagnostic messages.
//!
//! The sync never stops for a classification anomaly; it reports one of
//! these and carries on with a best-effort settings file.

use std::fmt;
use std::path::PathBuf;

/// Common suggestion messages.
pub mod suggestions {
    /// A source sits directly in the code directory.
    pub const NO_SUBDIRECTORY: &str =
        "RDKit sources are expected under `Code/<subdirectory>/`; check the upstream layout";

    /// A declared source does not look compilable.
    pub const NOT_COMPILABLE: &str =
        "add an exclusion rule if this entry is not a real source file";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Note,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Create a new note.
    pub fn note(message: impl Into<String>) -> Self {
        Self::new(Severity::Note, message)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic body, without the severity prefix.
    ///
    /// Used when the severity is already carried by the log level.
    pub fn body(&self) -> String {
        let mut output = self.message.clone();

        if let Some(ref path) = self.location {
            output.push_str(&format!("\n  --> {}", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("\n  = {}", ctx));
        }

        for suggestion in &self.suggestions {
            output.push_str(&format!("\n  help: {}", suggestion));
        }

        output
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self) -> String {
        format!("{}: {}\n", self.severity, self.body())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Route a diagnostic to the matching log level.
pub fn emit(diagnostic: &Diagnostic) {
    match diagnostic.severity {
        Severity::Warning => tracing::warn!("{}", diagnostic.body()),
        Severity::Note => tracing::info!("{}", diagnostic.body()),
    }
}
