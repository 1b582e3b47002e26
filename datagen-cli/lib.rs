//! Command-line front end for the datagen generator.
//!
//! This crate turns parsed command-line flags into [`GeneratorOptions`]
//! (see [`CliConfig::generator_options`]), opens the output destination and
//! drives the generation pipeline from `datagen-core`. The `datagen` binary
//! is a thin wrapper around [`run`].
//!
//! [`GeneratorOptions`]: datagen_core::GeneratorOptions

pub mod config;
pub mod error;
pub mod process;
pub mod utils;


pub use config::{CliConfig, Verbosity};
pub use error::{format_error_for_stderr, Error, Result};
pub use process::{open_output, run};
pub use utils::size::parse_size;

/// Installs the stderr logger for the given verbosity.
///
/// Stdout carries generated data only, so every diagnostic goes to stderr.
/// Calling this more than once keeps the first logger.
pub fn init_logging(verbosity: Verbosity) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stderr)
        .try_init();
}
