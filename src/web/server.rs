//! Server event loop: one JSON request per stdin line, one JSON response per
//! stdout line. Logging goes to stderr so stdout stays a clean protocol
//! channel.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::corpus::Corpus;
use crate::web::protocol::{ErrorResponse, SearchRequest, SearchResponse};
use crate::{engine, present, urlstate};

/// Run the bridge event loop over stdio until stdin closes.
///
/// The corpus is an immutable snapshot; requests are pure functions over it,
/// so no locking is needed and responses come back in request order.
pub fn run_server(corpus: Arc<Corpus>) {
    let stdin = io::stdin();
    let reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    info!(
        files = corpus.len(),
        declarations = corpus.declaration_count(),
        "Bridge ready, waiting for requests on stdin"
    );

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!(error = %e, "Error reading stdin");
                break;
            }
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        debug!(request = %line, "Incoming request");

        let request: SearchRequest = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Failed to parse request line");
                let err = ErrorResponse {
                    id: Value::Null,
                    error: format!("Parse error: {}", e),
                };
                let resp = serde_json::to_string(&err).unwrap_or_default();
                let _ = writeln!(writer, "{}", resp);
                let _ = writer.flush();
                continue;
            }
        };

        let response = handle_request(&corpus, &request);
        let resp_str = serde_json::to_string(&response).unwrap_or_default();
        debug!(response = %resp_str, "Outgoing response");
        let _ = writeln!(writer, "{}", resp_str);
        let _ = writer.flush();
    }

    info!("stdin closed, shutting down");
}

/// Execute one request: resolve the spec, search, render, and re-encode the
/// canonical URL.
pub fn handle_request(corpus: &Corpus, request: &SearchRequest) -> SearchResponse {
    let spec = request.to_spec();
    let result = engine::search(corpus, &spec);
    let rendered = present::render(&result);

    SearchResponse {
        id: request.id.clone().unwrap_or(Value::Null),
        url: urlstate::encode(&spec),
        summary: rendered.summary,
        count: rendered.count,
        results: rendered.entries,
    }
}
