// Whole-driver runs over temporary directories.

use std::fs;

use bt3zip::cli::args::parse_args_from;
use bt3zip::cli::report::FileOutcome;
use bt3zip::cli::run::{analyze_file, run, Job};
use bt3zip::parse::Strategy;
use tempfile::TempDir;

#[test]
fn run_succeeds_on_a_directory_tree() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("a.txt"), "abc ".repeat(500)).unwrap();
    fs::write(dir.path().join("sub/b.txt"), "xyz-".repeat(500)).unwrap();
    fs::write(dir.path().join("empty"), b"").unwrap();

    let root = dir.path().to_str().unwrap();
    let opts = parse_args_from(["bt3zip", "-q", "-r", "-T", "2", "--verify", root], None, None).unwrap();
    assert_eq!(run(&opts).unwrap(), 0);
}

#[test]
fn run_reports_failure_for_missing_input() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.bin");
    let opts = parse_args_from(["bt3zip", "-q", missing.to_str().unwrap()], None, None).unwrap();
    assert_eq!(run(&opts).unwrap(), 1);
}

#[test]
fn verified_segmented_best_parse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.txt");
    let text: String = (0..20_000).map(|i| format!("line {} of the input\n", i % 977)).collect();
    fs::write(&path, &text).unwrap();
    let job = Job { strategy: Strategy::Best, segment: 64 * 1024, verify: true };
    match analyze_file(&path, job).unwrap() {
        FileOutcome::Parsed(s) => {
            assert_eq!(s.input_len, text.len() as u64);
            assert!(s.estimated_bytes() < s.input_len / 3);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}
