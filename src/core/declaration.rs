//! Recognized statements inside a build description.
//!
//! Only two statement shapes are understood:
//!
//! ```text
//! rdkit_library(Name a.cpp b.cpp [LINK_LIBRARIES ...] [SHARED ...])
//! rdkit_headers(a.h b.h [DEST ...])
//! ```
//!
//! Everything else in a description file is ignored.

/// The kind of a recognized statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `rdkit_library(...)`: a library name followed by its sources.
    LibrarySources,
    /// `rdkit_headers(...)`: the public headers of a directory.
    PublicHeaders,
}

impl DeclarationKind {
    /// All recognized kinds.
    pub const ALL: [DeclarationKind; 2] =
        [DeclarationKind::LibrarySources, DeclarationKind::PublicHeaders];

    /// Statement keyword that opens a declaration of this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            DeclarationKind::LibrarySources => "rdkit_library",
            DeclarationKind::PublicHeaders => "rdkit_headers",
        }
    }

    /// Marker tokens that end the file list, in precedence order.
    ///
    /// The first marker present in the token list decides the cutoff, even if
    /// a later marker in this list appears earlier in the statement.
    pub fn terminators(&self) -> &'static [&'static str] {
        match self {
            DeclarationKind::LibrarySources => &["LINK_LIBRARIES", "SHARED"],
            DeclarationKind::PublicHeaders => &["DEST"],
        }
    }

    /// Number of leading tokens that are not file names.
    fn leading_tokens(&self) -> usize {
        match self {
            // library name
            DeclarationKind::LibrarySources => 1,
            DeclarationKind::PublicHeaders => 0,
        }
    }

    /// Detect the kind of a trimmed line by its opening keyword.
    pub fn from_statement(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| line.starts_with(kind.keyword()))
    }
}

/// One recognized statement with its raw argument tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    /// Whitespace-separated tokens between the opening `(` and the first `)`.
    pub tokens: Vec<String>,
}

impl Declaration {
    /// Build a declaration from the full (possibly joined) statement text.
    ///
    /// The argument list runs from the first `(` to the first `)` after it.
    /// Without a closing `)` it runs to the end of the text; without an
    /// opening `(` the statement has no arguments.
    pub fn from_statement(kind: DeclarationKind, text: &str) -> Self {
        let tokens = match text.split_once('(') {
            Some((_, args)) => {
                let args = args.split_once(')').map_or(args, |(inner, _)| inner);
                args.split_whitespace().map(str::to_owned).collect()
            }
            None => Vec::new(),
        };

        Declaration { kind, tokens }
    }

    /// Index of the first terminator marker, honoring marker precedence.
    fn cutoff(&self) -> usize {
        self.kind
            .terminators()
            .iter()
            .find_map(|marker| self.tokens.iter().position(|t| t == marker))
            .unwrap_or(self.tokens.len())
    }

    /// File tokens declared by this statement, in declaration order.
    pub fn files(&self) -> &[String] {
        let start = self.kind.leading_tokens();
        let end = self.cutoff();
        if end <= start {
            return &[];
        }
        &self.tokens[start..end]
    }
}
