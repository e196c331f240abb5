//! Serve startup: logging init, corpus load, then the stdio event loop.

use std::sync::Arc;
use std::time::Instant;

use tracing::info;

use crate::corpus::{self, CorpusOptions};
use crate::web::server;
use crate::SearchError;

use super::args::ServeArgs;

pub fn cmd_serve(args: ServeArgs) -> Result<(), SearchError> {
    let log_level = match args.log_level.as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(dir = %args.dir, ext = %args.ext, "Starting search bridge");

    let start = Instant::now();
    let corpus = corpus::load(&CorpusOptions {
        dir: args.dir,
        ext: args.ext,
        threads: args.threads,
        hidden: args.hidden,
        no_ignore: args.no_ignore,
    })?;
    info!(
        files = corpus.len(),
        declarations = corpus.declaration_count(),
        elapsed_ms = format_args!("{:.1}", start.elapsed().as_secs_f64() * 1000.0),
        "Corpus snapshot ready"
    );

    server::run_server(Arc::new(corpus));
    Ok(())
}
