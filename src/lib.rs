//! # declsearch — Declaration search core for a web code search front end
//!
//! Scans a corpus of source files, extracts top-level type declarations
//! (classes, structs, enums, unions) with tree-sitter, and answers
//! text/regex queries with a deterministic ordered result set plus a
//! canonical, shareable URL encoding of the search state.
//!
//! ## Library usage
//!
//! The binary is a CLI tool / stdio bridge for the web front end, but the
//! core pipeline is exposed as a library:
//!
//! ```no_run
//! use declsearch::{engine, present, urlstate};
//! use declsearch::corpus::{Corpus, CorpusOptions};
//! use declsearch::query::QuerySpec;
//!
//! let corpus = declsearch::corpus::load(&CorpusOptions::for_dir("./src")).unwrap();
//! let spec = QuerySpec::literal("SimpleSearch");
//! let result = engine::search(&corpus, &spec);
//! println!("{}", present::render(&result).summary);
//! println!("{}", urlstate::encode(&spec));
//! ```

use serde::{Deserialize, Serialize};

pub mod corpus;
pub mod engine;
pub mod error;
pub mod extract;
pub mod present;
pub mod query;
pub mod urlstate;
pub mod web;

pub mod cli;

pub use error::SearchError;

// ─── File helpers ────────────────────────────────────────────────────

/// Strip the `\\?\` extended-length path prefix that Windows canonicalize adds.
#[must_use]
pub fn clean_path(p: &str) -> String {
    p.strip_prefix(r"\\?\").unwrap_or(p).to_string()
}

/// Read a file as a String, using lossy UTF-8 conversion for non-UTF8 files.
/// Returns `(content, was_lossy)` where `was_lossy` is true if replacement
/// characters were inserted. Real codebases contain Windows-1252 smart quotes
/// in comments; those files must still be searchable.
pub fn read_file_lossy(path: &std::path::Path) -> std::io::Result<(String, bool)> {
    let raw = std::fs::read(path)?;
    match String::from_utf8(raw) {
        Ok(s) => Ok((s, false)),
        Err(e) => Ok((String::from_utf8_lossy(e.as_bytes()).into_owned(), true)),
    }
}

// ─── Declaration model ───────────────────────────────────────────────

/// Kind of a top-level type declaration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    Struct,
    Enum,
    Union,
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Union => "union",
        }
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeclarationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "class" => Ok(Self::Class),
            "struct" => Ok(Self::Struct),
            "enum" => Ok(Self::Enum),
            "union" => Ok(Self::Union),
            other => Err(format!("Unknown declaration kind: '{}'", other)),
        }
    }
}

/// A named, line-spanned unit extracted from a source file.
///
/// Declarations are a projection of their source file: they are owned by the
/// [`SourceFile`] they were extracted from and live exactly as long as it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// 1-based line where the declaration starts.
    pub line_start: u32,
    /// 1-based line of the closing brace (== line_start for one-liners).
    pub line_end: u32,
    /// The defining line, e.g. `class SimpleSearch {`.
    pub signature: String,
}

/// A source file with its extracted declarations, immutable after ingestion.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    /// A file with no parsed text, for embedders that enumerate
    /// declarations themselves.
    pub fn with_declarations(path: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            path: path.into(),
            text: String::new(),
            declarations,
        }
    }
}


// ─── End-to-end flow tests ───────────────────────────────────────────
