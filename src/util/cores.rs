/// Number of logical CPU cores, never less than 1.
pub fn count_cores() -> usize {
    num_cpus::get().max(1)
}

/// Number of physical cores, never less than 1.
///
/// Used as the worker count when `-T0` asks for "all cores" on machines where
/// hyper-threads would only contend for the same cache.
pub fn count_physical_cores() -> usize {
    num_cpus::get_physical().max(1)
}

/// Resolve a requested worker count: `0` means one per logical core.
pub fn resolve_workers(requested: usize) -> usize {
    if requested == 0 {
        count_cores()
    } else {
        requested
    }
}
