//! Command-line arguments and the runtime options derived from them.
//!
//! [`Args`] is the raw `clap` surface.  [`Args::into_options`] folds in the
//! environment defaults (`BT3ZIP_CLEVEL`, `BT3ZIP_NBWORKERS`) and validates
//! the combination, producing the [`Options`] the driver runs with.
//! [`parse_args_from`] takes an explicit argument list for unit tests.

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::cli::constants::{ENV_CLEVEL, ENV_NBWORKERS};
use crate::cli::size::{parse_size, read_u32_from_str};
use crate::config::{CLEVEL_DEFAULT, CLEVEL_MAX, NB_WORKERS_DEFAULT, SEGMENT_MIN};
use crate::displaylevel;
use crate::parse::Strategy;

/// Analyse how well files LZ77-parse with a binary-tree match finder.
#[derive(Parser, Debug)]
#[command(name = "bt3zip")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files or directories to analyse
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Analysis level (1-3 greedy, 4-6 lazy, 7-9 best of both)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=CLEVEL_MAX as i64))]
    pub level: Option<u32>,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// More output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Walk directories recursively
    #[arg(short, long)]
    pub recurse: bool,

    /// Worker threads (0 = one per core)
    #[arg(short = 'T', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Parse independent segments of this many bytes in parallel (0 = whole file)
    #[arg(long, value_name = "BYTES", value_parser = parse_size, default_value = "0")]
    pub segment: u64,

    /// Rebuild every file from its parse and compare checksums
    #[arg(long)]
    pub verify: bool,
}

/// Fully resolved runtime options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub inputs: Vec<PathBuf>,
    pub level: u32,
    pub strategy: Strategy,
    pub display_level: u32,
    pub recursive: bool,
    /// Requested worker count; `0` means one per core.
    pub nb_workers: usize,
    /// Segment size in bytes; `0` parses each file whole.
    pub segment: usize,
    pub verify: bool,
}

impl Args {
    /// Resolve defaults and validate.
    ///
    /// `env_clevel` / `env_nbworkers` are the raw values of the environment
    /// overrides, if set.
    pub fn into_options(self, env_clevel: Option<&str>, env_nbworkers: Option<&str>) -> Result<Options> {
        let level = match self.level {
            Some(l) => l,
            None => init_c_level_from(env_clevel),
        };
        let nb_workers = match self.threads {
            Some(t) => t,
            None => init_nb_workers_from(env_nbworkers),
        };
        let display_level = if self.quiet {
            1
        } else {
            (2 + self.verbose as u32).min(4)
        };
        let segment = usize::try_from(self.segment)
            .map_err(|_| anyhow!("segment size {} is too large", self.segment))?;
        let segment = if segment == 0 { 0 } else { segment.max(SEGMENT_MIN) };
        Ok(Options {
            inputs: self.files,
            level,
            strategy: Strategy::for_level(level),
            display_level,
            recursive: self.recurse,
            nb_workers,
            segment,
            verify: self.verify,
        })
    }
}

/// Parse `std::env::args()` and the environment overrides.
///
/// `--help` and `--version` print and exit from inside `clap`.
pub fn parse_args() -> Result<Options> {
    let args = Args::parse();
    args.into_options(
        std::env::var(ENV_CLEVEL).ok().as_deref(),
        std::env::var(ENV_NBWORKERS).ok().as_deref(),
    )
}

/// Parse an explicit argument list (first item is the program name).
pub fn parse_args_from<I, T>(argv: I, env_clevel: Option<&str>, env_nbworkers: Option<&str>) -> Result<Options>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv).map_err(|e| anyhow!("bad usage: {}", e))?;
    args.into_options(env_clevel, env_nbworkers)
}

// ── Environment defaults ──────────────────────────────────────────────────────

/// Default analysis level from a raw `BT3ZIP_CLEVEL` value.
///
/// Values above `CLEVEL_MAX` are clamped; zero, unset, or non-numeric values
/// fall back to `CLEVEL_DEFAULT`.
pub fn init_c_level_from(env_val: Option<&str>) -> u32 {
    if let Some(env) = env_val {
        match read_u32_from_str(env) {
            Some((0, _)) => {}
            Some((val, _rest)) => return val.min(CLEVEL_MAX),
            None => {
                displaylevel!(
                    2,
                    "Ignore environment variable setting {}={}: not a valid unsigned value \n",
                    ENV_CLEVEL,
                    env
                );
            }
        }
    }
    CLEVEL_DEFAULT
}

/// Default worker count from a raw `BT3ZIP_NBWORKERS` value.
pub fn init_nb_workers_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Some((val, _rest)) = read_u32_from_str(env) {
            return val as usize;
        }
        displaylevel!(
            2,
            "Ignore environment variable setting {}={}: not a valid unsigned value \n",
            ENV_NBWORKERS,
            env
        );
    }
    NB_WORKERS_DEFAULT
}
