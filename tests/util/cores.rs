use bt3zip::util::{count_cores, count_physical_cores, resolve_workers};

#[test]
fn core_counts_are_positive() {
    assert!(count_cores() >= 1);
    assert!(count_physical_cores() >= 1);
}

#[test]
fn explicit_worker_count_is_kept() {
    assert_eq!(resolve_workers(1), 1);
    assert_eq!(resolve_workers(64), 64);
    assert_eq!(resolve_workers(0), count_cores());
}
