//! Result presentation: the summary line and renderable declaration blocks
//! the UI layer consumes.

use serde::Serialize;

use crate::engine::MatchResult;

/// Summary shown when a search (or an empty/invalid query) matched nothing.
pub const NO_RESULTS_MESSAGE: &str = "No results for current query";

/// One renderable block per matched declaration.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
    pub name: String,
    /// Enclosing file path.
    pub path: String,
    /// 1-based line the declaration starts on.
    pub line: u32,
    /// Defining line, e.g. `class SimpleSearch {`.
    pub snippet: String,
}

/// The rendered result set: summary line plus entries in match order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub summary: String,
    pub count: usize,
    pub entries: Vec<RenderedEntry>,
}

/// Format a match result for the UI.
///
/// Zero matches — whatever the cause — renders the no-results message;
/// otherwise the summary counts one "line" per matched declaration.
#[must_use]
pub fn render(result: &MatchResult) -> Rendered {
    if result.is_empty() {
        return Rendered {
            summary: NO_RESULTS_MESSAGE.to_string(),
            count: 0,
            entries: Vec::new(),
        };
    }

    let entries = result
        .matches
        .iter()
        .map(|m| RenderedEntry {
            name: m.declaration.name.clone(),
            path: m.file.path.clone(),
            line: m.declaration.line_start,
            snippet: m.declaration.signature.clone(),
        })
        .collect();

    Rendered {
        summary: format!("Core code ({} lines)", result.count()),
        count: result.count(),
        entries,
    }
}

impl std::fmt::Display for Rendered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry.snippet)?;
            writeln!(f, "    {}:{}", entry.path, entry.line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::engine::search;
    use crate::query::QuerySpec;
    use crate::{Declaration, DeclarationKind, SourceFile};

    fn corpus() -> Corpus {
        Corpus::from_files(vec![SourceFile::with_declarations(
            "tests/UITests.cpp",
            vec![
                Declaration {
                    name: "SimpleSearch".to_string(),
                    kind: DeclarationKind::Class,
                    line_start: 3,
                    line_end: 6,
                    signature: "class SimpleSearch {".to_string(),
                },
                Declaration {
                    name: "PathFilter".to_string(),
                    kind: DeclarationKind::Class,
                    line_start: 8,
                    line_end: 11,
                    signature: "class PathFilter {".to_string(),
                },
            ],
        )])
    }

    #[test]
    fn test_summary_counts_declarations_not_source_lines() {
        let corpus = corpus();
        // both declarations span 4 source lines each; the summary counts
        // matched declarations, one "line" apiece
        let rendered = render(&search(&corpus, &QuerySpec::literal("i")));
        assert_eq!(rendered.summary, "Core code (2 lines)");
        assert_eq!(rendered.count, 2);
    }

    #[test]
    fn test_single_match_rendering() {
        let corpus = corpus();
        let rendered = render(&search(&corpus, &QuerySpec::literal("SimpleSearch")));
        assert_eq!(rendered.summary, "Core code (1 lines)");
        assert_eq!(
            rendered.entries,
            vec![RenderedEntry {
                name: "SimpleSearch".to_string(),
                path: "tests/UITests.cpp".to_string(),
                line: 3,
                snippet: "class SimpleSearch {".to_string(),
            }]
        );
    }

    #[test]
    fn test_no_results_message() {
        let corpus = corpus();
        for query in ["", "NothingMatchesThis"] {
            let rendered = render(&search(&corpus, &QuerySpec::literal(query)));
            assert_eq!(rendered.summary, NO_RESULTS_MESSAGE);
            assert_eq!(rendered.count, 0);
            assert!(rendered.entries.is_empty());
        }
    }

    #[test]
    fn test_display_contains_name_and_path_as_plain_text() {
        let corpus = corpus();
        let rendered = render(&search(&corpus, &QuerySpec::literal("SimpleSearch")));
        let text = rendered.to_string();
        assert!(text.contains("Core code (1 lines)"));
        assert!(text.contains("class SimpleSearch"));
        assert!(text.contains("tests/UITests.cpp:3"));
    }

    #[test]
    fn test_rendered_serializes_to_json() {
        let corpus = corpus();
        let rendered = render(&search(&corpus, &QuerySpec::literal("PathFilter")));
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["summary"], "Core code (1 lines)");
        assert_eq!(json["entries"][0]["name"], "PathFilter");
        assert_eq!(json["entries"][0]["path"], "tests/UITests.cpp");
    }
}
