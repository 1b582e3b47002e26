//! Asynchronous generation pipeline.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::config::GenerationSummary;
use crate::error::Result;
use crate::generator::Generator;
use crate::options::GeneratorOptions;
use crate::sink::BlockSink;

/// Generates `options.size()` bytes into an async writer.
///
/// Produces exactly the same bytes as [`crate::pipeline::generate`]. Filling a
/// block is synchronous; the task only yields while a block is being written.
///
/// # Parameters
///
/// * `writer` - Output destination implementing [`AsyncWrite`] + [`Unpin`] traits
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
/// - Writing to or flushing the writer fails
pub async fn generate_async<W>(
    mut writer: W,
    options: &GeneratorOptions,
) -> Result<GenerationSummary>
where
    W: AsyncWrite + Unpin,
{
    let mut generator = Generator::new(options)?;
    let mut block = generator.new_sink();

    match write_blocks_async(&mut generator, &mut block, &mut writer).await {
        Ok(()) => {
            let summary = generator.summary();
            log::debug!("generated {} bytes", summary.bytes_written);
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

async fn write_blocks_async<W: AsyncWrite + Unpin>(
    generator: &mut Generator,
    block: &mut BlockSink,
    writer: &mut W,
) -> std::io::Result<()> {
    while generator.fill_block(block) > 0 {
        writer.write_all(block.as_slice()).await?;
        block.clear();
    }
    writer.flush().await
}
