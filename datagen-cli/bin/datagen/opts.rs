//! Command line argument parsing for the datagen utility

use std::path::PathBuf;

use clap::Parser;

use datagen_cli::config::{COMPRESSIBILITY_DEFAULT, SEED_DEFAULT, SIZE_DEFAULT};
use datagen_cli::{parse_size, CliConfig, Verbosity};

/// Generate synthetic data with tunable compressibility
///
/// Writes a deterministic stream of pseudo-random bytes to stdout (or a
/// file). A share of the output, chosen by the compressibility percentage,
/// is copied from recently generated data so that compressors find matches.
#[derive(Parser, Debug)]
#[command(
    name = "datagen",
    version,
    about = "Generate synthetic data with tunable compressibility",
    long_about = "datagen writes a reproducible stream of synthetic data. The same size, \
                 seed and compressibility always produce the same bytes."
)]
pub struct DatagenOpts {
    /// Number of bytes to generate (K, M, G suffixes, optional trailing B)
    #[arg(value_name = "SIZE", value_parser = parse_size, conflicts_with = "size")]
    pub size_arg: Option<u64>,

    /// Number of bytes to generate (K, M, G suffixes, optional trailing B)
    #[arg(short = 'g', long = "size", value_name = "SIZE", value_parser = parse_size)]
    pub size: Option<u64>,

    /// Seed of the pseudo-random source
    #[arg(short = 's', long = "seed", value_name = "SEED", default_value_t = SEED_DEFAULT)]
    pub seed: u32,

    /// Compressibility in percent (0 is incompressible)
    #[arg(
        short = 'P',
        long = "compressibility",
        value_name = "PCT",
        default_value_t = COMPRESSIBILITY_DEFAULT
    )]
    pub compressibility: u32,

    /// Literal distribution skew in percent (0 is uniform)
    #[arg(short = 'L', value_name = "PCT", default_value_t = 0, hide = true)]
    pub literal: u32,

    /// Write to FILE instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(short = 'f', long = "force", requires = "output")]
    pub force: bool,

    /// Report parameters and results on stderr. Repeat for more detail.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress warnings. Use twice to suppress errors too.
    #[arg(short = 'q', long = "quiet", action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl DatagenOpts {
    /// Parse command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> CliConfig {
        CliConfig {
            size: self.size.or(self.size_arg).unwrap_or(SIZE_DEFAULT),
            seed: self.seed,
            compressibility: self.compressibility,
            literal_percent: self.literal,
            verbosity: Verbosity::from_counts(self.verbose, self.quiet),
            output: self.output.clone(),
            force: self.force,
        }
    }
}
