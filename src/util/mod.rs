//! Filesystem and host helpers used by the command-line front end.
//!
//! - [`cores`]     — logical/physical core counts and worker resolution
//! - [`file_size`] — regular-file sizes
//! - [`file_list`] — expansion of command-line inputs into regular files

pub mod cores;
pub mod file_list;
pub mod file_size;

pub use cores::{count_cores, count_physical_cores, resolve_workers};
pub use file_list::create_file_list;
pub use file_size::{get_file_size, get_total_file_size};
