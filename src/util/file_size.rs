//! File size helpers.
//!
//! Non-regular files (directories, pipes, devices) and paths that cannot be
//! stat-ted report a size of `0`, so callers can sum sizes without a
//! separate existence check.

use std::fs;
use std::path::Path;

/// Size in bytes of the regular file at `path`, or `0`.
pub fn get_file_size(path: &Path) -> u64 {
    fs::metadata(path)
        .ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Sum of [`get_file_size`] over `paths`.
pub fn get_total_file_size<P: AsRef<Path>>(paths: &[P]) -> u64 {
    paths.iter().map(|p| get_file_size(p.as_ref())).sum()
}
