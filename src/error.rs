//! Unified error type for the declaration search core.

use thiserror::Error;

/// All errors that can occur in search operations.
///
/// `InvalidPattern` and `EmptyQuery` never reach the rendering layer: the
/// engine recovers both into an empty result set. The remaining variants
/// surface only from the CLI / corpus-load layer.
#[derive(Error, Debug)]
pub enum SearchError {
    /// I/O error (file read, directory access)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid regex pattern in a regexp-mode query
    #[error("Invalid query pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Empty query text — matches nothing by definition
    #[error("Empty query matches nothing")]
    EmptyQuery,

    /// Corpus root directory does not exist
    #[error("Directory does not exist: {0}")]
    DirNotFound(String),

    /// Argument validation error
    #[error("{0}")]
    InvalidArgs(String),
}

impl SearchError {
    /// True for failures the engine degrades to an empty result set instead
    /// of propagating (spec-visible behavior: "no results", never a fault).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidPattern { .. } | Self::EmptyQuery)
    }
}
