//! Declaration extraction: tree-sitter-based parsing of source files into
//! flat lists of top-level type declarations.
//!
//! [`Language`] is the pluggable seam: adding a source language means one
//! enum variant plus one parser module — the engine never changes.

mod parser_cpp;

use std::path::Path;

use crate::Declaration;

// ─── Language ────────────────────────────────────────────────────────

/// Source languages the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Cpp,
}

impl Language {
    /// Detect the language from a file path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|e| e.to_str())?;
        match ext.to_lowercase().as_str() {
            "cpp" | "cc" | "cxx" | "c" | "h" | "hpp" | "hh" | "hxx" => Some(Self::Cpp),
            _ => None,
        }
    }
}

// ─── Extractor ───────────────────────────────────────────────────────

/// Owns one tree-sitter parser per language. Parsers are stateful and not
/// `Sync`, so each worker thread builds its own `Extractor`.
pub struct Extractor {
    cpp_parser: tree_sitter::Parser,
}

impl Extractor {
    pub fn new() -> Self {
        let mut cpp_parser = tree_sitter::Parser::new();
        cpp_parser
            .set_language(&tree_sitter_cpp::LANGUAGE.into())
            .expect("Error loading C++ grammar");
        Self { cpp_parser }
    }

    /// Extract top-level type declarations from `source`, in source order.
    ///
    /// Total and deterministic: a file the grammar cannot parse, or one with
    /// no declarations, yields an empty vec — never an error.
    pub fn extract(&mut self, language: Language, source: &str) -> Vec<Declaration> {
        match language {
            Language::Cpp => parser_cpp::parse_cpp_declarations(&mut self.cpp_parser, source),
        }
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DeclarationKind;

    #[test]
    fn test_language_from_path() {
        assert_eq!(
            Language::from_path(Path::new("src/UITests.cpp")),
            Some(Language::Cpp)
        );
        assert_eq!(
            Language::from_path(Path::new("include/widget.hpp")),
            Some(Language::Cpp)
        );
        assert_eq!(Language::from_path(Path::new("readme.md")), None);
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_extract_simple_class() {
        let mut ex = Extractor::new();
        let decls = ex.extract(Language::Cpp, "class SimpleSearch {\npublic:\n  int x;\n};\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].name, "SimpleSearch");
        assert_eq!(decls[0].kind, DeclarationKind::Class);
        assert_eq!(decls[0].line_start, 1);
        assert_eq!(decls[0].line_end, 4);
        assert_eq!(decls[0].signature, "class SimpleSearch {");
    }

    #[test]
    fn test_extract_empty_file() {
        let mut ex = Extractor::new();
        assert!(ex.extract(Language::Cpp, "").is_empty());
        assert!(ex.extract(Language::Cpp, "// just a comment\n").is_empty());
    }

    #[test]
    fn test_extract_is_deterministic() {
        let source = "struct A {};\nclass B {};\nenum C { X };\n";
        let mut ex = Extractor::new();
        let first = ex.extract(Language::Cpp, source);
        let second = ex.extract(Language::Cpp, source);
        assert_eq!(first, second);
    }
}
