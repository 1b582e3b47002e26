//! Per-step choice between fresh literals and back-references.

use crate::config::{MIN_MATCH, PROBABILITY_SCALE, WINDOW_SIZE};
use crate::rng::Rng32;

/// Shortest run produced in sparse mode (64 KiB).
const SPARSE_BASE_SHIFT: u32 = 16;

/// Outcome of one generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Emit `length` freshly sampled literal bytes.
    Literal {
        /// Number of literal bytes, at least 1.
        length: u32,
    },
    /// Copy `length` bytes starting `offset` bytes behind the write position.
    Match {
        /// Distance back into history, at least 1.
        offset: u32,
        /// Number of bytes to copy.
        length: u32,
    },
}

impl Decision {
    /// Number of bytes the decision asks for before truncation.
    pub fn len(&self) -> u32 {
        match *self {
            Decision::Literal { length } | Decision::Match { length, .. } => length,
        }
    }

    /// Returns `true` when the decision carries no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for back-reference decisions.
    pub fn is_match(&self) -> bool {
        matches!(self, Decision::Match { .. })
    }
}

/// Decides, step by step, whether to emit literals or a match.
///
/// A step draws 15 random bits and selects a match when they fall below
/// `floor(32768 * probability)`, so a probability of `0.0` never selects a
/// match. A probability of `1.0` switches to sparse mode, where multi-megabyte
/// runs of a repeated byte alternate with single literal markers.
#[derive(Debug, Clone)]
pub struct DecisionModel {
    threshold: u32,
    sparse: bool,
    marker_due: bool,
}

impl DecisionModel {
    /// Creates a model for `probability`, clamped to `0.0..=1.0` (NaN counts as 0).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };

        Self {
            threshold: (f64::from(PROBABILITY_SCALE) * probability) as u32,
            sparse: probability >= 1.0,
            marker_due: false,
        }
    }

    /// Match threshold on the 15-bit scale.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Returns `true` when the model produces sparse output.
    pub fn is_sparse(&self) -> bool {
        self.sparse
    }

    /// Chooses the next step given how many bytes were produced so far.
    ///
    /// The first step is always a literal because there is no history to copy
    /// from. Match offsets never exceed `produced` nor the window size.
    pub fn decide(&mut self, rng: &mut Rng32, produced: u64) -> Decision {
        if self.sparse {
            return self.decide_sparse(rng, produced);
        }

        if produced > 0 && rng.bits15() < self.threshold {
            let length = draw_length(rng) + MIN_MATCH;
            let offset = draw_offset(rng, produced);
            Decision::Match { offset, length }
        } else {
            Decision::Literal {
                length: draw_length(rng).max(1),
            }
        }
    }

    fn decide_sparse(&mut self, rng: &mut Rng32, produced: u64) -> Decision {
        if produced == 0 || self.marker_due {
            self.marker_due = false;
            return Decision::Literal { length: 1 };
        }

        self.marker_due = true;
        let base = 1u32 << (SPARSE_BASE_SHIFT + 2 * (rng.next_u32() & 3));
        Decision::Match {
            offset: 1,
            length: base + rng.below(base),
        }
    }
}

/// Run length: `0..=15` seven times out of eight, otherwise `15..=526`.
fn draw_length(rng: &mut Rng32) -> u32 {
    if (rng.next_u32() >> 7) & 7 != 0 {
        rng.below(16)
    } else {
        rng.below(512) + 15
    }
}

/// Offset in `1..=min(produced, WINDOW_SIZE)`, favouring recent bytes.
///
/// Drawing the bound itself uniformly before drawing the offset gives a mass
/// function that decreases with distance.
#[allow(clippy::cast_possible_truncation)]
fn draw_offset(rng: &mut Rng32, produced: u64) -> u32 {
    let limit = produced.min(WINDOW_SIZE as u64) as u32;
    let bound = 1 + rng.below(limit);
    1 + rng.below(bound)
}
