//! Front-end bridge: line-delimited JSON over stdio.
//!
//! The web layer owns HTTP, HTML and form state; this side owns query
//! decoding, matching, rendering, and the canonical URL it hands back.

pub mod protocol;
pub mod server;
