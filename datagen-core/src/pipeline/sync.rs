//! Synchronous generation pipeline.

use std::io::Write;

use crate::config::GenerationSummary;
use crate::error::Result;
use crate::generator::Generator;
use crate::options::GeneratorOptions;
use crate::sink::BlockSink;

/// Generates `options.size()` bytes into a writer.
///
/// Bytes are produced one block at a time and written with
/// [`Write::write_all`]; the writer is flushed once the last block is out.
/// Memory use is bounded by the block size and the history window,
/// independent of the requested size.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`Write`] trait
/// * `options` - Generation parameters [`GeneratorOptions`]
///
/// # Returns
///
/// Returns a [`GenerationSummary`] describing the produced stream.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The block size in `options` is zero
/// - Writing to or flushing the writer fails; generation stops at once and
///   bytes already written stay written
pub fn generate<W>(mut writer: W, options: &GeneratorOptions) -> Result<GenerationSummary>
where
    W: Write,
{
    let mut generator = Generator::new(options)?;
    let mut block = generator.new_sink();

    match write_blocks(&mut generator, &mut block, &mut writer) {
        Ok(()) => {
            let summary = generator.summary();
            log::debug!(
                "generated {} bytes ({} literal runs, {} matches)",
                summary.bytes_written,
                summary.literal_decisions,
                summary.match_decisions
            );
            Ok(summary)
        }
        Err(err) => {
            generator.fail();
            log::debug!(
                "generation aborted after {} bytes: {err}",
                generator.produced()
            );
            Err(err.into())
        }
    }
}

/// Generates the whole output into memory.
///
/// Convenient for tests and small sizes; prefer [`generate`] with a writer
/// for large outputs.
///
/// # Errors
///
/// Returns an error if the block size in `options` is zero.
pub fn generate_to_vec(options: &GeneratorOptions) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    generate(&mut out, options)?;
    Ok(out)
}

fn write_blocks<W: Write>(
    generator: &mut Generator,
    block: &mut BlockSink,
    writer: &mut W,
) -> std::io::Result<()> {
    while generator.fill_block(block) > 0 {
        block.drain_to(writer)?;
    }
    writer.flush()
}
