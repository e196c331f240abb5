//! Declaration search core for a web-based source code search tool.
//!
//! Binary crate entry point. All CLI logic is in the library's `cli` module.

// mimalloc aggressively returns freed pages to the OS after the parse-heavy
// corpus build, keeping the long-running serve process compact.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() {
    declsearch::cli::run();
}
