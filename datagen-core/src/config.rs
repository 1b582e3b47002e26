//! Shared constants and run statistics for data generation.

/// Size of the history window matches may reference.
///
/// Must be a power of two; offsets never exceed this value.
pub const WINDOW_SIZE: usize = 32 * 1024;

/// Default size of the block handed to the writer in one call.
pub const BLOCK_SIZE: usize = 128 * 1024;

/// Shortest run a match decision produces.
pub const MIN_MATCH: u32 = 4;

/// Resolution of the literal/match decision threshold (15 bits).
pub const PROBABILITY_SCALE: u32 = 1 << 15;

/// Statistical summary of a completed generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Total number of bytes handed to the output destination.
    pub bytes_written: u64,

    /// Number of steps that chose a literal run.
    pub literal_decisions: u64,

    /// Number of steps that chose a match.
    pub match_decisions: u64,

    /// Bytes produced by literal runs.
    pub literal_bytes: u64,

    /// Bytes produced by match copies.
    pub match_bytes: u64,
}

impl GenerationSummary {
    /// Fraction of the output produced by match copies, in `0.0..=1.0`.
    #[allow(clippy::cast_precision_loss)]
    pub fn match_fraction(&self) -> f64 {
        if self.bytes_written == 0 {
            0.0
        } else {
            self.match_bytes as f64 / self.bytes_written as f64
        }
    }

    /// Average number of bytes emitted per match decision.
    ///
    /// Runs cut short by the end of the output count with their truncated
    /// length. Returns `0.0` when no match was emitted.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_match_length(&self) -> f64 {
        if self.match_decisions == 0 {
            0.0
        } else {
            self.match_bytes as f64 / self.match_decisions as f64
        }
    }
}
