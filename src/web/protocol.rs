//! Wire types for the front-end bridge.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::present::RenderedEntry;
use crate::query::QuerySpec;
use crate::urlstate;

/// One search request from the front end.
///
/// State arrives either as a (possibly partial) URL or as explicit form
/// fields; explicit fields override whatever the URL decodes to, so a toggle
/// click can send just the changed control plus the current URL.
#[derive(Deserialize, Debug, Default)]
pub struct SearchRequest {
    /// Echoed back verbatim in the response.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub case: Option<bool>,
    #[serde(default)]
    pub regexp: Option<bool>,
    #[serde(default)]
    pub path: Option<String>,
}

impl SearchRequest {
    /// Resolve the request into the spec to execute.
    #[must_use]
    pub fn to_spec(&self) -> QuerySpec {
        let mut spec = match &self.url {
            Some(url) => urlstate::decode(url),
            None => QuerySpec::default(),
        };
        if let Some(query) = &self.query {
            spec.query = query.clone();
        }
        if let Some(case) = self.case {
            spec.case_sensitive = case;
        }
        if let Some(regexp) = self.regexp {
            spec.use_regexp = regexp;
        }
        if let Some(path) = &self.path {
            spec.path_filter = path.clone();
        }
        spec
    }
}

/// Response to one search request. `url` is always the full canonical
/// re-encoding, so any state change updates every field the front end shows.
#[derive(Serialize, Debug)]
pub struct SearchResponse {
    pub id: Value,
    pub url: String,
    pub summary: String,
    pub count: usize,
    pub results: Vec<RenderedEntry>,
}

/// Sent for request lines that cannot be parsed; the server loop continues.
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub id: Value,
    pub error: String,
}
