//! Input list expansion.
//!
//! [`create_file_list`] turns the paths given on the command line into a flat
//! list of regular files.  Directories are walked with [`walkdir`], either
//! fully (`recursive`) or one level deep.  Symlinks found inside a directory
//! are never followed and never listed; a symlink named directly on the
//! command line is passed through unchanged.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn walk_error(e: walkdir::Error) -> io::Error {
    match (e.io_error(), e.path()) {
        (Some(io), Some(path)) => io::Error::new(io.kind(), format!("{}: {}", path.display(), io)),
        (Some(io), None) => io::Error::new(io.kind(), io.to_string()),
        (None, _) => io::Error::other(e.to_string()),
    }
}

/// Expand `inputs` into regular files, in input order.
///
/// Entries of one directory are sorted by file name so the result does not
/// depend on the file system's listing order.
pub fn create_file_list<P: AsRef<Path>>(inputs: &[P], recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut result = Vec::new();
    for input in inputs {
        let input = input.as_ref();
        if !input.is_dir() {
            result.push(input.to_path_buf());
            continue;
        }
        let mut walk = WalkDir::new(input).min_depth(1).sort_by_file_name();
        if !recursive {
            walk = walk.max_depth(1);
        }
        for entry in walk {
            let entry = entry.map_err(walk_error)?;
            if entry.file_type().is_file() {
                result.push(entry.into_path());
            }
        }
    }
    Ok(result)
}
