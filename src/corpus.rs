//! Corpus construction: directory walk plus parallel declaration extraction.
//!
//! A [`Corpus`] is the process-wide, read-only snapshot every search runs
//! against. It is built once at startup and never mutated; file order is
//! fixed at build time and defines result order.

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::extract::{Extractor, Language};
use crate::{SearchError, SourceFile, clean_path, read_file_lossy};

// ─── Options ─────────────────────────────────────────────────────────

/// Knobs for corpus construction; defaults match the CLI defaults.
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// Root directory to scan.
    pub dir: String,
    /// Comma-separated file extensions to parse.
    pub ext: String,
    /// Parallel parse threads, 0 = auto-detect.
    pub threads: usize,
    /// Include hidden files.
    pub hidden: bool,
    /// Also scan .gitignore'd files.
    pub no_ignore: bool,
}

impl CorpusOptions {
    pub fn for_dir(dir: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            ext: "cpp,cc,cxx,h,hpp,hh".to_string(),
            threads: 0,
            hidden: false,
            no_ignore: false,
        }
    }
}

// ─── Corpus ──────────────────────────────────────────────────────────

/// The fixed collection of source files available to search.
#[derive(Debug)]
pub struct Corpus {
    root: String,
    files: Vec<SourceFile>,
    read_errors: usize,
    lossy_file_count: usize,
}

impl Corpus {
    /// Build a corpus from pre-enumerated files, preserving the given order.
    ///
    /// This is the interface the search core depends on; [`load`] is one
    /// producer of it. Tests and embedders construct corpora directly.
    #[must_use]
    pub fn from_files(files: Vec<SourceFile>) -> Self {
        Self {
            root: String::new(),
            files,
            read_errors: 0,
            lossy_file_count: 0,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Files in corpus order (the order searches iterate in).
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn declaration_count(&self) -> usize {
        self.files.iter().map(|f| f.declarations.len()).sum()
    }

    /// Files that could not be read during the build.
    pub fn read_errors(&self) -> usize {
        self.read_errors
    }

    /// Files that required lossy UTF-8 conversion.
    pub fn lossy_file_count(&self) -> usize {
        self.lossy_file_count
    }
}

// ─── Build pipeline ──────────────────────────────────────────────────

/// Walk `opts.dir`, parse every matching file, and assemble the corpus.
///
/// File order is lexicographic by path: the parallel walk emits entries in
/// scheduling order, and result ordering must not depend on that.
pub fn load(opts: &CorpusOptions) -> Result<Corpus, SearchError> {
    let root = Path::new(&opts.dir);
    if !root.exists() {
        return Err(SearchError::DirNotFound(opts.dir.clone()));
    }
    let dir = std::fs::canonicalize(root).unwrap_or_else(|_| PathBuf::from(&opts.dir));
    let dir_str = clean_path(&dir.to_string_lossy());

    let extensions: Vec<String> = opts
        .ext
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if extensions.is_empty() {
        return Err(SearchError::InvalidArgs(
            "no file extensions given".to_string(),
        ));
    }

    let start = Instant::now();

    // ─── Collect candidate files ──────────────────────────────
    let mut walker = WalkBuilder::new(&dir);
    walker.hidden(!opts.hidden);
    walker.git_ignore(!opts.no_ignore);
    walker.git_global(!opts.no_ignore);
    walker.git_exclude(!opts.no_ignore);
    if opts.threads > 0 {
        walker.threads(opts.threads);
    }

    let all_files: Mutex<Vec<String>> = Mutex::new(Vec::new());
    walker.build_parallel().run(|| {
        Box::new(|entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(_) => return ignore::WalkState::Continue,
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }
            let path = entry.path();
            let ext_match = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
            if !ext_match {
                return ignore::WalkState::Continue;
            }
            let clean = clean_path(&path.to_string_lossy());
            all_files
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(clean);
            ignore::WalkState::Continue
        })
    });

    let mut files: Vec<String> = all_files.into_inner().unwrap_or_else(|e| e.into_inner());
    files.sort();
    let total_files = files.len();
    debug!(files = total_files, "Corpus walk complete");

    // ─── Parallel parsing ─────────────────────────────────────
    let num_threads = if opts.threads > 0 {
        opts.threads
    } else {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    };
    let chunk_size = (total_files + num_threads - 1) / num_threads;
    let chunks: Vec<Vec<(usize, String)>> = files
        .into_iter()
        .enumerate()
        .collect::<Vec<_>>()
        .chunks(chunk_size.max(1))
        .map(|c| c.to_vec())
        .collect();

    let read_errors = AtomicUsize::new(0);
    let lossy_count = AtomicUsize::new(0);

    let thread_results: Vec<Vec<(usize, SourceFile)>> = std::thread::scope(|s| {
        let handles: Vec<_> = chunks
            .into_iter()
            .map(|chunk| {
                let read_errors = &read_errors;
                let lossy_count = &lossy_count;
                s.spawn(move || {
                    let mut extractor = Extractor::new();
                    let mut parsed: Vec<(usize, SourceFile)> = Vec::with_capacity(chunk.len());

                    for (file_idx, file_path) in chunk {
                        let (text, was_lossy) = match read_file_lossy(Path::new(&file_path)) {
                            Ok(r) => r,
                            Err(e) => {
                                warn!(path = %file_path, error = %e, "Skipping unreadable file");
                                read_errors.fetch_add(1, Ordering::Relaxed);
                                continue;
                            }
                        };
                        if was_lossy {
                            lossy_count.fetch_add(1, Ordering::Relaxed);
                        }

                        let declarations = match Language::from_path(Path::new(&file_path)) {
                            Some(lang) => extractor.extract(lang, &text),
                            None => Vec::new(),
                        };

                        parsed.push((
                            file_idx,
                            SourceFile {
                                path: file_path,
                                text,
                                declarations,
                            },
                        ));
                    }

                    parsed
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // ─── Index-stable merge ───────────────────────────────────
    // Chunks finish in any order; reassemble by original file index so the
    // corpus order is independent of thread scheduling.
    let mut indexed: Vec<(usize, SourceFile)> = thread_results.into_iter().flatten().collect();
    indexed.sort_by_key(|(idx, _)| *idx);
    let parsed_files: Vec<SourceFile> = indexed.into_iter().map(|(_, f)| f).collect();

    let corpus = Corpus {
        root: dir_str,
        files: parsed_files,
        read_errors: read_errors.into_inner(),
        lossy_file_count: lossy_count.into_inner(),
    };

    info!(
        files = corpus.len(),
        declarations = corpus.declaration_count(),
        read_errors = corpus.read_errors,
        elapsed_ms = format_args!("{:.1}", start.elapsed().as_secs_f64() * 1000.0),
        "Corpus loaded"
    );

    Ok(corpus)
}
