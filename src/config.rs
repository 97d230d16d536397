// config.rs — Compile-time configuration constants.
//
// Window and match-length bounds follow the DEFLATE format: a 32 KiB history,
// matches of 3..=258 bytes.  Every arena in `mf` is sized from these values,
// so they are `usize` and powers of two where masking is involved.

// Size of the sliding history window in bytes.
// Distances emitted by the match finder lie in [1, WINDOW_SIZE - 1].
pub const WINDOW_SIZE: usize = 32_768;

// Mask that turns an absolute position into a cyclic slot index.
pub const WINDOW_MASK: usize = WINDOW_SIZE - 1;

// Shortest match the finder will ever report.
// Callers must not expect candidates when fewer bytes than this remain.
pub const MIN_MATCH: usize = 3;

// Longest match the finder will ever report; also the per-position length limit.
pub const MAX_MATCH: usize = 258;

// Number of hash-head slots (16-bit bucket of a 3-byte context).
pub const HASH_SIZE: usize = 1 << 16;

// Default analysis level when neither `-l` nor BT3ZIP_CLEVEL is given.
pub const CLEVEL_DEFAULT: u32 = 3;

// Highest accepted analysis level.
pub const CLEVEL_MAX: u32 = 9;

// Default number of worker threads (0 = one per logical core).
// Can be overridden by the BT3ZIP_NBWORKERS environment variable,
// or by the -T# command-line flag.
pub const NB_WORKERS_DEFAULT: usize = 0;

// Inputs larger than this are refused.  Absolute positions are `u32` and start
// at WINDOW_SIZE, so the hard ceiling is far above this; the limit keeps a
// single analysis within a sane memory budget.
pub const MAX_INPUT_SIZE: u64 = 1_200_000_000;

// Block size used by the best-of parsing strategy when it branches.
pub const BEST_BLOCK_SIZE: usize = 64 * 1024;

// Smallest segment accepted by `--segment` (smaller values are rounded up).
pub const SEGMENT_MIN: usize = 4 * 1024;
