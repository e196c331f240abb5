//! Search engine: path filtering plus exhaustive linear matching over the
//! corpus, with stable file/declaration ordering.

use tracing::debug;

use crate::corpus::Corpus;
use crate::query::{Matcher, QuerySpec};
use crate::{Declaration, SourceFile};

// ─── Path filter ─────────────────────────────────────────────────────

/// Restricts the candidate file set by substring match against file paths.
///
/// Always case-sensitive, independent of the query's case toggle. Applied
/// before the per-declaration scan so excluded files are never visited.
#[derive(Debug, Clone)]
pub struct PathFilter {
    needle: String,
}

impl PathFilter {
    #[must_use]
    pub fn new(filter: &str) -> Self {
        Self {
            needle: filter.to_string(),
        }
    }

    /// Empty filter accepts every file.
    #[must_use]
    pub fn accepts(&self, path: &str) -> bool {
        self.needle.is_empty() || path.contains(&self.needle)
    }
}

// ─── Match results ───────────────────────────────────────────────────

/// One matched declaration, borrowing from the corpus snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Match<'c> {
    pub file: &'c SourceFile,
    pub declaration: &'c Declaration,
}

/// Ordered matches for one request. Recomputed on every request, never
/// cached.
#[derive(Debug, Default)]
pub struct MatchResult<'c> {
    /// File order first (corpus order), then declaration order within a file.
    pub matches: Vec<Match<'c>>,
}

impl<'c> MatchResult<'c> {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
        }
    }

    /// Total matched-declaration count — what drives the summary line.
    #[must_use]
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

// ─── Search ──────────────────────────────────────────────────────────

/// Run one search request against the corpus snapshot.
///
/// Pure and deterministic: identical corpus and spec always produce an
/// identical result. Declarations match by name (not body text); see
/// DESIGN.md for that decision. An empty or malformed query degrades to an
/// empty result — the only failure path, and it never propagates.
#[must_use]
pub fn search<'c>(corpus: &'c Corpus, spec: &QuerySpec) -> MatchResult<'c> {
    let filter = PathFilter::new(&spec.path_filter);

    let matcher = match Matcher::compile(spec) {
        Ok(m) => m,
        Err(e) => {
            debug!(error = %e, query = %spec.query, "Query did not compile, returning no results");
            return MatchResult::empty();
        }
    };

    let mut matches = Vec::new();
    for file in corpus.files() {
        if !filter.accepts(&file.path) {
            continue;
        }
        for declaration in &file.declarations {
            if matcher.matches(&declaration.name) {
                matches.push(Match { file, declaration });
            }
        }
    }

    MatchResult { matches }
}
