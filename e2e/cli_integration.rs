// e2e/cli_integration.rs — black-box tests of the `bt3zip` binary.
//
// Covers argument handling, exit codes, the savings report, directory
// expansion, verification, and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Locate the `bt3zip` binary produced by Cargo.
fn bt3zip_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_bt3zip") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("bt3zip");
    p
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(bt3zip_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("BT3ZIP_CLEVEL")
        .env_remove("BT3ZIP_NBWORKERS")
        .output()
        .expect("failed to run bt3zip")
}

fn stdout(o: &Output) -> String {
    String::from_utf8_lossy(&o.stdout).into_owned()
}

fn stderr(o: &Output) -> String {
    String::from_utf8_lossy(&o.stderr).into_owned()
}

/// A TempDir holding a compressible text file of ~8 KB.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "Hello, binary tree!\n".repeat(400)).unwrap();
    (dir, input)
}

// ── 1. Report ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_single_file_report() {
    let (dir, _input) = make_temp_input();
    let out = run_in(dir.path(), &["input.txt"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let s = stdout(&out);
    assert!(s.starts_with("Processed 1 file\n"), "stdout: {}", s);
    assert!(s.contains("Saved "), "stdout: {}", s);
    assert!(s.contains("out of 7.81KB"), "stdout: {}", s);
}

#[test]
fn test_cli_every_level_succeeds_with_verify() {
    let (dir, _input) = make_temp_input();
    for level in 1..=9 {
        let lvl = level.to_string();
        let out = run_in(dir.path(), &["-l", &lvl, "--verify", "input.txt"]);
        assert!(out.status.success(), "level {}: {}", level, stderr(&out));
    }
}

#[test]
fn test_cli_verbose_prints_per_file_line() {
    let (dir, _input) = make_temp_input();
    let out = run_in(dir.path(), &["-v", "input.txt"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("input.txt"), "stderr: {}", stderr(&out));
}

#[test]
fn test_cli_quiet_prints_nothing() {
    let (dir, _input) = make_temp_input();
    let out = run_in(dir.path(), &["-q", "input.txt"]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).is_empty());
}

#[test]
fn test_cli_random_data_result_is_bigger() {
    let dir = TempDir::new().unwrap();
    let mut x: u32 = 0x1234_5678;
    let data: Vec<u8> = (0..50_000)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x >> 24) as u8
        })
        .collect();
    fs::write(dir.path().join("noise.bin"), data).unwrap();
    let out = run_in(dir.path(), &["noise.bin"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Processed 1 file\nResult is bigger\n");
}

// ── 2. Inputs ────────────────────────────────────────────────────────────────

#[test]
fn test_cli_empty_file_is_not_counted() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty"), b"").unwrap();
    let out = run_in(dir.path(), &["empty"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "No compatible files found\n");
}

#[test]
fn test_cli_directory_recursion() {
    let (dir, _input) = make_temp_input();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/more.txt"), "more more more more\n".repeat(50)).unwrap();

    let flat = run_in(dir.path(), &["."]);
    assert!(flat.status.success());
    assert!(stdout(&flat).starts_with("Processed 1 file\n"), "{}", stdout(&flat));

    let deep = run_in(dir.path(), &["-r", "."]);
    assert!(deep.status.success());
    assert!(stdout(&deep).starts_with("Processed 2 files\n"), "{}", stdout(&deep));
}

#[test]
fn test_cli_missing_file_exits_1() {
    let (dir, _input) = make_temp_input();
    let out = run_in(dir.path(), &["input.txt", "does-not-exist.bin"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("does-not-exist.bin"), "stderr: {}", stderr(&out));
    // The readable file is still reported.
    assert!(stdout(&out).starts_with("Processed 1 file\n"));
}

#[test]
fn test_cli_segmented_multithreaded() {
    let dir = TempDir::new().unwrap();
    let text: String = (0..30_000).map(|i| format!("{} ", i % 1_000)).collect();
    fs::write(dir.path().join("seg.txt"), text).unwrap();
    let out = run_in(dir.path(), &["-T", "4", "--segment", "16K", "--verify", "-l", "7", "seg.txt"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
}

// ── 3. Usage errors ──────────────────────────────────────────────────────────

#[test]
fn test_cli_no_arguments_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &[]);
    assert!(!out.status.success());
}

#[test]
fn test_cli_bad_level_is_usage_error() {
    let (dir, _input) = make_temp_input();
    let out = run_in(dir.path(), &["-l", "12", "input.txt"]);
    assert!(!out.status.success());
}

#[test]
fn test_cli_help_and_version() {
    let dir = TempDir::new().unwrap();
    let help = run_in(dir.path(), &["--help"]);
    assert!(help.status.success());
    assert!(stdout(&help).contains("--segment"));
    let version = run_in(dir.path(), &["--version"]);
    assert!(version.status.success());
    assert!(stdout(&version).contains(env!("CARGO_PKG_VERSION")));
}

// ── 4. Environment ───────────────────────────────────────────────────────────

#[test]
fn test_cli_env_level_is_used() {
    let (dir, _input) = make_temp_input();
    let out = Command::new(bt3zip_bin())
        .args(["-vv", "input.txt"])
        .current_dir(dir.path())
        .env("BT3ZIP_CLEVEL", "8")
        .env_remove("BT3ZIP_NBWORKERS")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(stderr(&out).contains("level 8 (best)"), "stderr: {}", stderr(&out));
}

#[test]
fn test_cli_bad_env_value_warns_and_continues() {
    let (dir, _input) = make_temp_input();
    let out = Command::new(bt3zip_bin())
        .arg("input.txt")
        .current_dir(dir.path())
        .env("BT3ZIP_NBWORKERS", "many")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(stderr(&out).contains("BT3ZIP_NBWORKERS=many"), "stderr: {}", stderr(&out));
}
