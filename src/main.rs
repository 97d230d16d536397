//! Binary entry point for the `bt3zip` analyser.
//!
//! 1. [`parse_args`] reads the command line and environment into `Options`.
//! 2. The display level is applied process-wide.
//! 3. [`run`] analyses every input and returns the exit code.

use bt3zip::cli::args::parse_args;
use bt3zip::cli::constants::{set_display_level, AUTHOR, PROGRAM_NAME};
use bt3zip::cli::run::run;
use bt3zip::{display, displaylevel};

fn main() {
    let opts = match parse_args() {
        Ok(o) => o,
        Err(e) => {
            display!("{}: {:#}\n", PROGRAM_NAME, e);
            std::process::exit(1);
        }
    };
    set_display_level(opts.display_level);

    displaylevel!(
        3,
        "*** {} v{} {}-bit, by {} ***\n",
        PROGRAM_NAME,
        bt3zip::VERSION_STRING,
        std::mem::size_of::<*const ()>() * 8,
        AUTHOR
    );

    let exit_code = match run(&opts) {
        Ok(code) => code,
        Err(e) => {
            displaylevel!(1, "{}: {:#}\n", PROGRAM_NAME, e);
            1
        }
    };
    std::process::exit(exit_code);
}
