// cli/constants.rs — program identity, size multipliers, and display-level logging.

use std::sync::atomic::{AtomicU32, Ordering};

pub const PROGRAM_NAME: &str = "bt3zip";
pub const AUTHOR: &str = "the bt3zip authors";

// ── Size multipliers ──────────────────────────────────────────────────────────
pub const KB: u64 = 1 << 10;
pub const MB: u64 = 1 << 20;
pub const GB: u64 = 1 << 30;

// ── Environment overrides ─────────────────────────────────────────────────────
pub const ENV_CLEVEL: &str = "BT3ZIP_CLEVEL";
pub const ENV_NBWORKERS: &str = "BT3ZIP_NBWORKERS";

// ── Display level ─────────────────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = per-file detail; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Print to stderr when the display level is at least `$level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print to stderr in debug builds only.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}
