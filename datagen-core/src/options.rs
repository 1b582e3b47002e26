//! Configuration builder for generation runs.

use std::num::NonZeroUsize;

use crate::config::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Default output size (64 KiB).
pub const DEFAULT_SIZE: u64 = 64 * 1024;

/// Default compressibility probability.
pub const DEFAULT_COMPRESSIBILITY: f64 = 0.5;

/// Parameters of one generation run.
///
/// Probabilities are clamped into `0.0..=1.0` when set, NaN becomes `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    size: u64,
    compressibility: f64,
    literal_skew: f64,
    seed: u32,
    block_size: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            compressibility: DEFAULT_COMPRESSIBILITY,
            literal_skew: 0.0,
            seed: 0,
            block_size: BLOCK_SIZE,
        }
    }
}

impl GeneratorOptions {
    /// Sets the exact number of bytes to produce.
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Sets the probability that a step emits a match instead of literals.
    ///
    /// - `0.0`: incompressible noise, no matches at all
    /// - `0.5`: roughly half of the output is copied from history (default)
    /// - `1.0`: sparse output made of very long repeated runs
    #[must_use]
    pub fn with_compressibility(mut self, probability: f64) -> Self {
        self.compressibility = clamp_unit(probability);
        self
    }

    /// Sets how strongly literal bytes concentrate on a small alphabet.
    ///
    /// `0.0` samples literals uniformly over all 256 byte values; `1.0` emits a
    /// single repeated character.
    #[must_use]
    pub fn with_literal_skew(mut self, skew: f64) -> Self {
        self.literal_skew = clamp_unit(skew);
        self
    }

    /// Sets the seed of the pseudo-random source.
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the size of the blocks handed to the writer.
    ///
    /// Smaller blocks lower memory use at the cost of more write calls. The
    /// value does not influence the generated bytes.
    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Requested output size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Compressibility probability in `0.0..=1.0`.
    pub fn compressibility(&self) -> f64 {
        self.compressibility
    }

    /// Literal skew in `0.0..=1.0`.
    pub fn literal_skew(&self) -> f64 {
        self.literal_skew
    }

    /// Seed of the pseudo-random source.
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Validated block size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOption`] if the block size is zero.
    pub fn block_capacity(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.block_size)
            .ok_or_else(|| Error::InvalidOption("block size must be greater than zero".into()))
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
