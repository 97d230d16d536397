// bt3zip — binary-tree LZ77 match finder for DEFLATE-class encoders

pub mod config;
pub mod mf;
pub mod parse;
pub mod util;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use mf::{Match, MatchBuffer, MatchFinder, MATCH_BUFFER_LEN};
pub use parse::{parse, parse_segmented, reconstruct, Strategy, Summary, Token};
