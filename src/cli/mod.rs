//! CLI layer: argument parsing, command dispatch, and the one-shot search
//! command.

pub mod args;
mod serve;

pub use args::*;

use std::time::Instant;

use clap::{Parser, Subcommand};

use crate::corpus::{self, CorpusOptions};
use crate::query::QuerySpec;
use crate::{SearchError, engine, present, urlstate};

// ─── CLI ─────────────────────────────────────────────────────────────

/// Declaration search core for a web-based source code search tool
#[derive(Parser, Debug)]
#[command(name = "declsearch", version, about, after_help = "\
Run 'declsearch <COMMAND> --help' for detailed options and examples.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Run one query against a directory and print the rendered result
    Search(SearchArgs),

    /// Serve search requests for the web front end over stdio
    Serve(ServeArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search(args) => cmd_search(args),
        Commands::Serve(args) => serve::cmd_serve(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// ─── cmd_search ─────────────────────────────────────────────────────

fn cmd_search(args: SearchArgs) -> Result<(), SearchError> {
    let start = Instant::now();

    let corpus = corpus::load(&CorpusOptions {
        dir: args.dir,
        ext: args.ext,
        threads: args.threads,
        hidden: args.hidden,
        no_ignore: args.no_ignore,
    })?;

    let spec = QuerySpec {
        query: args.query,
        case_sensitive: args.case,
        use_regexp: args.regexp,
        path_filter: args.path,
    };

    let result = engine::search(&corpus, &spec);
    let rendered = present::render(&result);

    if args.count {
        println!("{}", rendered.count);
    } else {
        print!("{}", rendered);
        println!("{}", urlstate::encode(&spec));
    }

    eprintln!(
        "{} match(es) across {} file(s) in {:.1}ms",
        rendered.count,
        corpus.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
