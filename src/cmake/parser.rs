//! Declaration parser for build description files.
//!
//! The scanner walks the file line by line, taking one line off the front of
//! the remaining text at a time:
//!
//! - **Seeking**: a trimmed line that starts with a statement keyword opens a
//!   declaration; any other line is skipped.
//! - **Accumulating**: following lines are appended, separated by a single
//!   space, until the joined text contains a `)`.
//!
//! A declaration still open at end of input is emitted with whatever text was
//! accumulated.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::{Declaration, DeclarationKind, DescriptionLocation};
use crate::util::fs::read_to_string;

/// Files declared by one build description, prefixed with its directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredFiles {
    pub headers: Vec<PathBuf>,
    pub sources: Vec<PathBuf>,
}

#[derive(Debug)]
enum ScanState {
    Seeking,
    Accumulating {
        kind: DeclarationKind,
        text: String,
    },
}

/// Split off the first line of `text`, returning it and the remainder.
fn next_line(text: &str) -> (&str, &str) {
    text.split_once('\n').unwrap_or((text, ""))
}

/// Extract all recognized declarations from description file contents.
pub fn parse_declarations(contents: &str) -> Vec<Declaration> {
    let mut declarations = Vec::new();
    let mut state = ScanState::Seeking;
    let mut rest = contents;

    while !rest.is_empty() {
        let (line, remainder) = next_line(rest);
        rest = remainder;

        state = match state {
            ScanState::Seeking => {
                let line = line.trim();
                match DeclarationKind::from_statement(line) {
                    Some(kind) => ScanState::Accumulating {
                        kind,
                        text: line.to_string(),
                    },
                    None => ScanState::Seeking,
                }
            }
            ScanState::Accumulating { kind, mut text } => {
                text.push(' ');
                text.push_str(line);
                ScanState::Accumulating { kind, text }
            }
        };

        if let ScanState::Accumulating { kind, text } = &state {
            if text.contains(')') {
                declarations.push(Declaration::from_statement(*kind, text));
                state = ScanState::Seeking;
            }
        }
    }

    if let ScanState::Accumulating { kind, text } = state {
        declarations.push(Declaration::from_statement(kind, &text));
    }

    declarations
}

/// Parser for the build description of a single directory.
#[derive(Debug, Default)]
pub struct DescriptionParser;

impl DescriptionParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse the description file at `location`. A missing or unreadable file
    /// is an error.
    pub fn parse_file(&self, location: &DescriptionLocation) -> Result<DeclaredFiles> {
        let contents = read_to_string(&location.description_file())?;
        Ok(self.parse_content(&contents, location.dir()))
    }

    /// Parse description contents, prefixing every file token with `dir`.
    pub fn parse_content(&self, contents: &str, dir: &Path) -> DeclaredFiles {
        let mut files = DeclaredFiles::default();

        for decl in parse_declarations(contents) {
            let paths = decl.files().iter().map(|token| dir.join(token));
            match decl.kind {
                DeclarationKind::LibrarySources => files.sources.extend(paths),
                DeclarationKind::PublicHeaders => files.headers.extend(paths),
            }
        }

        files
    }
}
