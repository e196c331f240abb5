//! CLI argument structs for all subcommands.

use clap::Parser;

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Query text (substring, or a regular expression with --regexp)
    pub query: String,

    /// Root directory of the corpus
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// File extensions to parse, comma-separated
    #[arg(short, long, default_value = "cpp,cc,cxx,h,hpp,hh")]
    pub ext: String,

    /// Case-sensitive matching
    #[arg(long)]
    pub case: bool,

    /// Treat the query as a regular expression
    #[arg(long)]
    pub regexp: bool,

    /// Only search files whose path contains this substring
    #[arg(short, long, default_value = "")]
    pub path: String,

    /// Number of parallel parse threads (0 = auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Include hidden files
    #[arg(long)]
    pub hidden: bool,

    /// Also scan .gitignore'd files
    #[arg(long)]
    pub no_ignore: bool,

    /// Show only the match count
    #[arg(short = 'c', long)]
    pub count: bool,
}

#[derive(Parser, Debug)]
#[command(after_long_help = r#"WHAT IT DOES:
  Loads the corpus once (directory walk + tree-sitter parse of every matching
  file), then answers search requests from the web front end as line-delimited
  JSON on stdin/stdout:

    request:  {"id": 1, "url": "/SimpleSearch?case=false&regexp=false&path=&"}
    request:  {"id": 2, "query": "PathFilter", "path": "Filter.cpp"}
    response: {"id": 2, "url": "...", "summary": "Core code (1 lines)",
               "count": 1, "results": [{"name": ..., "path": ..., ...}]}

  Every response carries the full canonical URL for the executed search state,
  so the front end can update its address bar on any toggle change.

EXAMPLES:
  Serve a C++ tree:     declsearch serve -d ./src
  Verbose logging:      declsearch serve -d ./src --log-level debug
  Headers too:          declsearch serve -d ./src -e cpp,cc,h,hpp
"#)]
pub struct ServeArgs {
    /// Root directory of the corpus
    #[arg(short, long, default_value = ".")]
    pub dir: String,

    /// File extensions to parse, comma-separated
    #[arg(short, long, default_value = "cpp,cc,cxx,h,hpp,hh")]
    pub ext: String,

    /// Number of parallel parse threads (0 = auto)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,

    /// Include hidden files
    #[arg(long)]
    pub hidden: bool,

    /// Also scan .gitignore'd files
    #[arg(long)]
    pub no_ignore: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
