//! Fixed-capacity block buffer between the generator and the destination.

use std::io::Write;

/// Block of generated bytes waiting to be written.
///
/// The generator fills the block up to its capacity; the pipeline drains it
/// into the destination and clears it. The capacity never changes, so memory
/// use does not depend on the requested output size.
#[derive(Debug, Clone)]
pub struct BlockSink {
    buf: Vec<u8>,
    capacity: usize,
}

impl BlockSink {
    /// Creates an empty block holding at most `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Maximum number of bytes the block holds.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes currently buffered.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Room left before the block is full.
    pub fn spare(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Returns `true` once the block reached its capacity.
    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.capacity
    }

    /// Appends one byte. The caller checks [`BlockSink::spare`] first.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        debug_assert!(!self.is_full());
        self.buf.push(byte);
    }

    /// Buffered bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Discards buffered bytes, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Writes the buffered bytes to `writer` and clears the block.
    ///
    /// # Errors
    ///
    /// Returns the writer's error unchanged. The block is left untouched on
    /// failure; bytes the writer already accepted are not recalled.
    pub fn drain_to<W: Write>(&mut self, writer: &mut W) -> std::io::Result<usize> {
        let written = self.buf.len();
        if written > 0 {
            writer.write_all(&self.buf)?;
            self.buf.clear();
        }
        Ok(written)
    }
}
