//! File analysis driver.
//!
//! Files are analysed in parallel on a dedicated `rayon` pool.  Each job sends
//! its [`FileReport`] back over a `crossbeam-channel`; the calling thread
//! reorders them into input order, prints them, and accumulates [`Totals`].

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use crossbeam_channel::unbounded;
use xxhash_rust::xxh64::xxh64;

use crate::cli::args::Options;
use crate::cli::constants::display_level;
use crate::cli::report::{FileOutcome, FileReport, Totals};
use crate::config::MAX_INPUT_SIZE;
use crate::parse::{parse_segmented, reconstruct, Strategy, Summary};
use crate::util::{create_file_list, get_file_size, get_total_file_size, resolve_workers};
use crate::{debugoutput, displaylevel, displayout};

/// Per-file settings shared by every job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub strategy: Strategy,
    pub segment: usize,
    pub verify: bool,
}

impl From<&Options> for Job {
    fn from(o: &Options) -> Self {
        Job {
            strategy: o.strategy,
            segment: o.segment,
            verify: o.verify,
        }
    }
}

/// Parse one file and summarise the result.
pub fn analyze_file(path: &Path, job: Job) -> Result<FileOutcome> {
    if get_file_size(path) > MAX_INPUT_SIZE {
        bail!("{}: File too big", path.display());
    }
    let data = fs::read(path).with_context(|| format!("{}: cannot read", path.display()))?;
    if data.is_empty() {
        return Ok(FileOutcome::Empty);
    }
    if data.len() as u64 > MAX_INPUT_SIZE {
        bail!("{}: File too big", path.display());
    }

    let tokens = parse_segmented(&data, job.strategy, job.segment);
    debugoutput!("{}: {} tokens\n", path.display(), tokens.len());

    if job.verify {
        let rebuilt = reconstruct(&tokens)
            .ok_or_else(|| anyhow!("{}: parse references bytes before the start", path.display()))?;
        let (expected, actual) = (xxh64(&data, 0), xxh64(&rebuilt, 0));
        if rebuilt.len() != data.len() || expected != actual {
            bail!(
                "{}: verification failed (xxh64 {:016x} != {:016x})",
                path.display(),
                actual,
                expected
            );
        }
        displaylevel!(4, "{}: verified, xxh64 {:016x}\n", path.display(), expected);
    }

    Ok(FileOutcome::Parsed(Summary::from_tokens(&tokens, data.len())))
}

fn emit(report: &FileReport, totals: &mut Totals) {
    match &report.outcome {
        FileOutcome::Failed(msg) => displaylevel!(1, "Error: {}\n", msg),
        _ => {
            if let Some(line) = report.detail_line() {
                displaylevel!(3, "{}\n", line);
            }
        }
    }
    totals.add(report);
}

/// Analyse every input and print the savings report.
///
/// Returns the process exit code: 0 when every file was analysed, 1 if any
/// failed.
pub fn run(opts: &Options) -> Result<i32> {
    let files = create_file_list(&opts.inputs, opts.recursive).context("cannot list inputs")?;
    let workers = resolve_workers(opts.nb_workers);
    displaylevel!(
        4,
        "{} file(s), {} bytes, level {} ({}), {} worker(s)\n",
        files.len(),
        get_total_file_size(&files),
        opts.level,
        opts.strategy,
        workers
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .context("cannot start worker pool")?;

    let job = Job::from(opts);
    let (tx, rx) = unbounded::<FileReport>();
    for (index, path) in files.into_iter().enumerate() {
        let tx = tx.clone();
        pool.spawn(move || {
            let outcome = analyze_file(&path, job)
                .unwrap_or_else(|e| FileOutcome::Failed(format!("{:#}", e)));
            // The receiver outlives every job.
            let _ = tx.send(FileReport { index, path, outcome });
        });
    }
    drop(tx);

    let mut totals = Totals::default();
    let mut pending = BTreeMap::new();
    let mut next = 0usize;
    for report in rx.iter() {
        pending.insert(report.index, report);
        while let Some(r) = pending.remove(&next) {
            emit(&r, &mut totals);
            next += 1;
        }
    }

    if display_level() >= 2 {
        displayout!("{}", totals.savings_report());
    }
    Ok(if totals.failed > 0 { 1 } else { 0 })
}
