//! Bounded history of produced bytes and back-reference copying.

use crate::config::WINDOW_SIZE;
use crate::sink::BlockSink;

/// Ring buffer holding the most recent [`WINDOW_SIZE`] produced bytes.
///
/// Every produced byte, literal or copied, is appended, so matches can
/// reference earlier matches. Memory use is fixed regardless of how much
/// output the generator produces.
#[derive(Clone)]
pub struct HistoryWindow {
    buf: Box<[u8]>,
    head: usize,
    filled: usize,
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryWindow {
    /// Creates an empty window of [`WINDOW_SIZE`] bytes.
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; WINDOW_SIZE].into_boxed_slice(),
            head: 0,
            filled: 0,
        }
    }

    /// Maximum distance a match may reach back.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes currently available as match sources.
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Returns `true` before the first byte is produced.
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Appends one produced byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf[self.head] = byte;
        self.head = (self.head + 1) & (WINDOW_SIZE - 1);
        if self.filled < WINDOW_SIZE {
            self.filled += 1;
        }
    }

    /// Copies the byte `offset` positions behind the write head and appends it.
    ///
    /// Repeating this call `length` times reproduces a back-reference of
    /// `length` bytes. When `offset < length` the copy reads bytes written
    /// earlier in the same run, which yields the cyclic pattern of the last
    /// `offset` bytes.
    #[inline]
    pub fn copy_match(&mut self, offset: u32) -> u8 {
        let offset = offset as usize;
        debug_assert!(offset >= 1 && offset <= self.filled);

        let byte = self.buf[self.head.wrapping_sub(offset) & (WINDOW_SIZE - 1)];
        self.push(byte);
        byte
    }

    /// Emits up to `length` bytes of a match into `sink`.
    ///
    /// Copies byte by byte so overlapping source and destination ranges behave
    /// like a compressor's back-reference. Stops early when the sink is full and
    /// returns the number of bytes emitted.
    pub fn emit_match(&mut self, offset: u32, length: usize, sink: &mut BlockSink) -> usize {
        let count = length.min(sink.spare());
        for _ in 0..count {
            sink.push(self.copy_match(offset));
        }
        count
    }

    /// Returns the last `n` produced bytes in order, oldest first.
    pub fn recent(&self, n: usize) -> Vec<u8> {
        let n = n.min(self.filled);
        (0..n)
            .map(|i| self.buf[self.head.wrapping_sub(n - i) & (WINDOW_SIZE - 1)])
            .collect()
    }
}

impl std::fmt::Debug for HistoryWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryWindow")
            .field("capacity", &self.capacity())
            .field("len", &self.filled)
            .finish()
    }
}
