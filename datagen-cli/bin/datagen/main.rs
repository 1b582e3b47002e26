//! Synthetic data generator
//!
//! Writes a deterministic stream of data whose compressibility is set on the
//! command line, for testing and benchmarking compressors.

use std::process;

mod opts;

use opts::DatagenOpts;

use datagen_cli::{format_error_for_stderr, init_logging, run};

const PROGRAM_NAME: &str = "datagen";

fn main() -> std::io::Result<()> {
    let opts = DatagenOpts::parse();
    let config = opts.config();

    init_logging(config.verbosity);

    if let Err(err) = run(&config) {
        if err.is_broken_pipe() {
            log::debug!("output closed by the reader: {err}");
            return Ok(());
        }
        if let Some(msg) = format_error_for_stderr(PROGRAM_NAME, config.verbosity, &err) {
            eprintln!("{msg}");
        }
        process::exit(1);
    }

    Ok(())
}
