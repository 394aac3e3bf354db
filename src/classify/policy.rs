//! Hand-maintained filtering policy for the RDKit tree.
//!
//! Every rule carries the reason it exists. The tables are not configurable.

use crate::core::DescriptionLocation;

/// A description directory that is never parsed.
#[derive(Debug, Clone, Copy)]
pub struct IgnoredDirectory {
    /// Path suffix, compared component-wise.
    pub suffix: &'static str,
    pub reason: &'static str,
}

/// Description directories that are skipped.
pub const IGNORED_DIRECTORIES: &[IgnoredDirectory] = &[
    IgnoredDirectory {
        suffix: "GraphMol/CIPLabeler",
        reason: "fails the automated sync, unused by the rest of RDKit or Rosetta",
    },
    IgnoredDirectory {
        suffix: "GraphMol/RGroupDecomposition",
        reason: "fails the automated sync, unused by the rest of RDKit or Rosetta",
    },
    IgnoredDirectory {
        suffix: "Wrap",
        reason: "Python wrapping, not needed for the C++ library",
    },
    IgnoredDirectory {
        suffix: "Qt",
        reason: "Qt specific code",
    },
    IgnoredDirectory {
        suffix: "Qt/Demo",
        reason: "Qt specific code",
    },
];

/// How an [`ExclusionRule`] matches a `/`-separated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathMatch {
    Contains(&'static str),
    EndsWith(&'static str),
}

impl PathMatch {
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathMatch::Contains(needle) => path.contains(needle),
            PathMatch::EndsWith(suffix) => path.ends_with(suffix),
        }
    }
}

/// A rule that drops a declared source.
#[derive(Debug, Clone, Copy)]
pub struct ExclusionRule {
    pub pattern: PathMatch,
    pub reason: &'static str,
}

/// Sources dropped after aggregation. Headers are never filtered.
pub const SOURCE_EXCLUSIONS: &[ExclusionRule] = &[
    ExclusionRule {
        pattern: PathMatch::Contains("RDBoost"),
        reason: "Python wrapper code",
    },
    ExclusionRule {
        pattern: PathMatch::Contains("SLNParse"),
        reason: "alternate parser, requires regex support",
    },
    ExclusionRule {
        pattern: PathMatch::EndsWith("SLNParse/${BISON_OUTPUT_FILES}"),
        reason: "generated parser placeholder",
    },
    ExclusionRule {
        pattern: PathMatch::EndsWith("SLNParse/${FLEX_OUTPUT_FILES}"),
        reason: "generated lexer placeholder",
    },
    ExclusionRule {
        pattern: PathMatch::EndsWith("SmilesParse/${BISON_OUTPUT_FILES}"),
        reason: "generated parser placeholder, real files added as extras",
    },
    ExclusionRule {
        pattern: PathMatch::EndsWith("SmilesParse/${FLEX_OUTPUT_FILES}"),
        reason: "generated lexer placeholder, real files added as extras",
    },
];

/// Files produced by the upstream bison/flex step.
///
/// They only exist after RDKit has been configured once, so no build
/// description or scan can be relied on to find them.
pub const GENERATED_HEADERS: &[&str] = &[
    "Code/GraphMol/SmilesParse/smarts.tab.hpp",
    "Code/GraphMol/SmilesParse/smiles.tab.hpp",
];

pub const GENERATED_SOURCES: &[&str] = &[
    "Code/GraphMol/SmilesParse/lex.yysmarts.cpp",
    "Code/GraphMol/SmilesParse/lex.yysmiles.cpp",
    "Code/GraphMol/SmilesParse/smarts.tab.cpp",
    "Code/GraphMol/SmilesParse/smiles.tab.cpp",
];

/// The ignore rule that applies to `location`, if any.
pub fn ignored_directory(location: &DescriptionLocation) -> Option<&'static IgnoredDirectory> {
    IGNORED_DIRECTORIES
        .iter()
        .find(|rule| location.ends_with(rule.suffix))
}

/// The first exclusion rule matching a source path, if any.
pub fn source_exclusion(path: &str) -> Option<&'static ExclusionRule> {
    SOURCE_EXCLUSIONS
        .iter()
        .find(|rule| rule.pattern.matches(path))
}
