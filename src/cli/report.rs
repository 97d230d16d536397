//! Per-file results and the final savings report.

use std::fmt::Write as _;
use std::path::PathBuf;

use crate::cli::size::format_size;
use crate::parse::Summary;

/// Outcome of analysing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Parsed(Summary),
    /// Empty files are skipped without counting as processed.
    Empty,
    Failed(String),
}

/// One file's result, tagged with its position in the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub index: usize,
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileReport {
    /// One-line description shown at display level 3.
    pub fn detail_line(&self) -> Option<String> {
        match &self.outcome {
            FileOutcome::Parsed(s) => Some(format!(
                "{:<30} : {:>10} -> {:>10} bytes ({:6.2}%), {} literals, {} copies, longest {}",
                self.path.display(),
                s.input_len,
                s.estimated_bytes(),
                percent(s.estimated_bytes(), s.input_len),
                s.literals,
                s.copies,
                s.longest_copy,
            )),
            FileOutcome::Empty => Some(format!("{}: empty file, skipped", self.path.display())),
            FileOutcome::Failed(_) => None,
        }
    }
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        100.0 * part as f64 / whole as f64
    }
}

/// Running totals over all processed files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub processed: u64,
    pub failed: u64,
    pub bytes: u64,
    pub savings: i64,
}

impl Totals {
    pub fn add(&mut self, report: &FileReport) {
        match &report.outcome {
            FileOutcome::Parsed(s) => {
                self.processed += 1;
                self.bytes += s.input_len;
                self.savings += s.savings();
            }
            FileOutcome::Empty => {}
            FileOutcome::Failed(_) => self.failed += 1,
        }
    }

    /// The closing report, one line per `\n`.
    pub fn savings_report(&self) -> String {
        if self.processed == 0 {
            return "No compatible files found\n".to_string();
        }
        let mut out = format!(
            "Processed {} file{}\n",
            self.processed,
            if self.processed > 1 { "s" } else { "" }
        );
        if self.savings < 0 {
            out.push_str("Result is bigger\n");
            return out;
        }
        let _ = writeln!(
            out,
            "Saved {} out of {} ({:.4}%)",
            format_size(self.savings as u64),
            format_size(self.bytes),
            100.0 * self.savings as f64 / self.bytes as f64
        );
        out
    }
}
