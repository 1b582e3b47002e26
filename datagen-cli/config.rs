//! Configuration types and constants for the datagen CLI.

use std::path::PathBuf;

use datagen_core::GeneratorOptions;
use log::LevelFilter;

/// Default buffer size for file output
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Bytes generated when no size is given
pub const SIZE_DEFAULT: u64 = 64 * 1024;

/// Seed used when none is given
pub const SEED_DEFAULT: u32 = 0;

/// Compressibility percentage used when none is given
pub const COMPRESSIBILITY_DEFAULT: u32 = 50;

/// Upper bound of the literal distribution percentage
pub const LITERAL_PERCENT_MAX: u32 = 100;

/// How much diagnostic output reaches stderr.
///
/// Ordered from quietest to most verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Nothing at all, not even errors (`-qq`)
    Silent,
    /// Errors only (`-q`)
    Errors,
    /// Errors and warnings
    #[default]
    Normal,
    /// Run parameters and the completion report (`-v`)
    Info,
    /// Internal progress (`-vv`)
    Debug,
    /// Per-block tracing (`-vvv`)
    Trace,
}

impl Verbosity {
    /// Combines counted `-v` and `-q` flags into a single level.
    ///
    /// Quiet flags win over verbose ones.
    pub fn from_counts(verbose: u8, quiet: u8) -> Self {
        match (quiet, verbose) {
            (0, 0) => Verbosity::Normal,
            (0, 1) => Verbosity::Info,
            (0, 2) => Verbosity::Debug,
            (0, _) => Verbosity::Trace,
            (1, _) => Verbosity::Errors,
            _ => Verbosity::Silent,
        }
    }

    /// Logger filter matching this verbosity.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Silent => LevelFilter::Off,
            Verbosity::Errors => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }

    /// Returns `true` if error messages should be printed.
    pub fn shows_errors(self) -> bool {
        self > Verbosity::Silent
    }
}

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Number of bytes to generate
    pub size: u64,
    /// Seed of the pseudo-random source
    pub seed: u32,
    /// Probability of a match, in percent
    pub compressibility: u32,
    /// Literal distribution skew, in percent (0 is uniform)
    pub literal_percent: u32,
    /// Diagnostic output level
    pub verbosity: Verbosity,
    /// Output file, or `None` for stdout
    pub output: Option<PathBuf>,
    /// Overwrite an existing output file
    pub force: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            size: SIZE_DEFAULT,
            seed: SEED_DEFAULT,
            compressibility: COMPRESSIBILITY_DEFAULT,
            literal_percent: 0,
            verbosity: Verbosity::default(),
            output: None,
            force: false,
        }
    }
}

impl CliConfig {
    /// Translates the percentages into generator options.
    ///
    /// The literal percentage is clamped to 100; the compressibility is left
    /// to the generator, which clamps probabilities above 1.
    pub fn generator_options(&self) -> GeneratorOptions {
        let literal_percent = self.literal_percent.min(LITERAL_PERCENT_MAX);

        GeneratorOptions::default()
            .with_size(self.size)
            .with_seed(self.seed)
            .with_compressibility(f64::from(self.compressibility) / 100.0)
            .with_literal_skew(f64::from(literal_percent) / 100.0)
    }
}
