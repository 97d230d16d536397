//! Command-line interface for the `bt3zip` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, size multipliers, env-variable names, and the `DISPLAY_LEVEL` logging macros. |
//! | [`size`]      | `64K`-style size parsing and K/M/G formatting. |
//! | [`args`]      | `clap` arguments, environment defaults, and the resolved [`args::Options`]. |
//! | [`report`]    | Per-file reports and the closing savings summary. |
//! | [`run`]       | Parallel per-file analysis and report collection. |
//!
//! Typical call sequence: `args::parse_args` → `run::run`.

pub mod constants;
pub mod size;
pub mod args;
pub mod report;
pub mod run;
