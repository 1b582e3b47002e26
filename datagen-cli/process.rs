//! High-level generation run and output handling.

use std::fs::File;
use std::io;
use std::path::Path;

use datagen_core::{generate, GenerationSummary};

use crate::config::{CliConfig, COMPRESSIBILITY_DEFAULT, DEFAULT_BUFFER_SIZE};
use crate::error::{Error, Result};
use crate::utils::bytes::format_size;

/// Opens the destination for generated data.
///
/// # Parameters
///
/// * `path` - Optional path to the output file. If `None` or empty, writes to stdout
/// * `force` - Overwrite an existing file instead of failing
///
/// # Returns
///
/// A trait object implementing [`io::Write`] that wraps either:
///
/// - A buffered file writer for file output
/// - A locked stdout handle for stdout output
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - The output file already exists and `force` is `false`
/// - The file cannot be created due to permissions, missing directories, etc.
pub fn open_output(path: Option<&Path>, force: bool) -> Result<Box<dyn io::Write>> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        // Blocks are already large; no extra buffering in front of stdout.
        return Ok(Box::new(io::stdout().lock()));
    };

    if path.exists() && !force {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }

    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(io::BufWriter::with_capacity(
        DEFAULT_BUFFER_SIZE,
        file,
    )))
}

/// Generates data according to the CLI configuration.
///
/// This is the main entry point of the `datagen` binary:
///
/// 1. Reports the run parameters at info level
/// 2. Opens the output destination (file or stdout)
/// 3. Streams the generated bytes into it
/// 4. Reports what was produced
///
/// # Parameters
///
/// * `config` - CLI configuration specifying size, seed, compressibility and output
///
/// # Returns
///
/// Returns the [`GenerationSummary`] of the completed run.
///
/// # Errors
///
/// Returns an error in these cases:
///
/// - Output file creation fails, or the file exists and `force` is not set
/// - Writing to the destination fails; bytes already written are kept
pub fn run(config: &CliConfig) -> Result<GenerationSummary> {
    log::debug!("Data Generator {}", env!("CARGO_PKG_VERSION"));
    log::info!("Seed = {}", config.seed);
    if config.compressibility != COMPRESSIBILITY_DEFAULT {
        log::info!("Compressibility : {}%", config.compressibility);
    }

    let output = open_output(config.output.as_deref(), config.force)?;
    let summary = generate(output, &config.generator_options())?;

    log::info!(
        "Generated {} in {} literal runs and {} matches ({:.1}% copied)",
        format_size(summary.bytes_written),
        summary.literal_decisions,
        summary.match_decisions,
        summary.match_fraction() * 100.0
    );

    Ok(summary)
}
