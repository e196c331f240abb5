//! Query compilation: [`QuerySpec`] plus the [`Matcher`] it compiles into.

use serde::{Deserialize, Serialize};

use crate::SearchError;

// ─── QuerySpec ───────────────────────────────────────────────────────

/// The immutable tuple of query text and its three toggles.
///
/// Constructed once per request. Equality between two specs is defined by
/// round-tripping through the canonical URL encoding (see [`crate::urlstate`]),
/// which for this value type coincides with structural equality.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    pub query: String,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub use_regexp: bool,
    #[serde(default)]
    pub path_filter: String,
}

impl QuerySpec {
    /// A literal, case-insensitive, unfiltered query — the front end's
    /// default toggle state.
    pub fn literal(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

// ─── Matcher ─────────────────────────────────────────────────────────

/// Executable matcher compiled from a [`QuerySpec`].
///
/// A tagged variant rather than branching in the scan loop: the literal/regex
/// and case decisions are taken once at compile time per request.
#[derive(Debug)]
pub enum Matcher {
    Literal {
        /// Lowercased at compile time when the match is case-insensitive.
        needle: String,
        case_sensitive: bool,
    },
    Regex(regex::Regex),
}

impl Matcher {
    /// Compile a spec into a matcher.
    ///
    /// Construction never partially succeeds: an empty query or a malformed
    /// pattern yields a recoverable [`SearchError`], which the engine turns
    /// into "no results" — never a fault visible to the rendering layer.
    pub fn compile(spec: &QuerySpec) -> Result<Self, SearchError> {
        if spec.query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        if spec.use_regexp {
            // Case-insensitivity via the embedded modifier, not pre-folding:
            // folding the candidate would corrupt patterns like [A-Z].
            let pattern = if spec.case_sensitive {
                spec.query.clone()
            } else {
                format!("(?i){}", spec.query)
            };
            let re = regex::Regex::new(&pattern).map_err(|e| SearchError::InvalidPattern {
                pattern: spec.query.clone(),
                source: e,
            })?;
            Ok(Self::Regex(re))
        } else {
            let needle = if spec.case_sensitive {
                spec.query.clone()
            } else {
                spec.query.to_lowercase()
            };
            Ok(Self::Literal {
                needle,
                case_sensitive: spec.case_sensitive,
            })
        }
    }

    /// Test a candidate string against the compiled query.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::Literal {
                needle,
                case_sensitive: true,
            } => text.contains(needle.as_str()),
            Self::Literal { needle, .. } => text.to_lowercase().contains(needle.as_str()),
            Self::Regex(re) => re.is_match(text),
        }
    }
}
