use std::path::PathBuf;

use bt3zip::cli::report::{FileOutcome, FileReport, Totals};
use bt3zip::parse::Summary;

fn parsed(index: usize, input_len: u64, estimated: u64) -> FileReport {
    FileReport {
        index,
        path: PathBuf::from(format!("file{}", index)),
        outcome: FileOutcome::Parsed(Summary { input_len, bits: estimated * 8, ..Summary::default() }),
    }
}

#[test]
fn scaled_savings() {
    let mut t = Totals::default();
    t.add(&parsed(0, 3 << 20, 1 << 20));
    t.add(&parsed(1, 1 << 20, 1 << 19));
    assert_eq!(t.processed, 2);
    assert_eq!(
        t.savings_report(),
        "Processed 2 files\nSaved 2.50MB out of 4.00MB (62.5000%)\n"
    );
}

#[test]
fn detail_line_mentions_path_and_sizes() {
    let line = parsed(3, 1000, 250).detail_line().unwrap();
    assert!(line.starts_with("file3"));
    assert!(line.contains("1000"));
    assert!(line.contains("250"));
    assert!(line.contains("25.00%"));
}

#[test]
fn failed_report_has_no_detail_line() {
    let r = FileReport { index: 0, path: "x".into(), outcome: FileOutcome::Failed("boom".into()) };
    assert_eq!(r.detail_line(), None);
}
