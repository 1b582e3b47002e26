//! Deterministic counter-based pseudo-random source.
//!
//! Every value is a pure function of the seed and the index of the call that
//! produced it, so two generators created from the same seed yield identical
//! sequences on every platform.

/// Odd increment applied to the counter for each call (the 64-bit golden ratio).
const GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Multipliers used to spread the 32-bit seed over the 64-bit key.
const PRIME32_1: u64 = 2_654_435_761;
const PRIME32_2: u64 = 2_246_822_519;

/// Counter-based 32-bit pseudo-random generator.
///
/// The `i`-th call returns the upper half of a 64-bit avalanche mix of
/// `key + (i + 1) * GAMMA`, where `key` is derived from the seed. The period is
/// 2^64 calls, far beyond any output size the generator can be asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rng32 {
    key: u64,
    counter: u64,
}

impl Rng32 {
    /// Creates a generator positioned at call index zero.
    pub fn new(seed: u32) -> Self {
        let seed = u64::from(seed);
        let key = mix64((seed.wrapping_mul(PRIME32_1) << 32) ^ seed.wrapping_mul(PRIME32_2));
        Self { key, counter: 0 }
    }

    /// Returns the value the `index`-th call of a generator seeded with `seed` yields.
    pub fn value_at(seed: u32, index: u64) -> u32 {
        let mut rng = Self::new(seed);
        rng.counter = index;
        rng.next_u32()
    }

    /// Number of values drawn so far.
    pub fn calls(&self) -> u64 {
        self.counter
    }

    /// Draws the next 32-bit value.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.counter = self.counter.wrapping_add(1);
        let mixed = mix64(self.key.wrapping_add(self.counter.wrapping_mul(GAMMA)));
        (mixed >> 32) as u32
    }

    /// Draws a 15-bit value in `0..32768`.
    #[inline]
    pub fn bits15(&mut self) -> u32 {
        (self.next_u32() >> 3) & 0x7FFF
    }

    /// Draws a uniform value in `0..n` without modulo bias.
    ///
    /// Uses a widening multiply and rejects the few low products that would
    /// make some results more likely than others. Returns 0 when `n` is 0.
    pub fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }

        let mut product = u64::from(self.next_u32()) * u64::from(n);
        let mut low = product as u32;
        if low < n {
            let threshold = n.wrapping_neg() % n;
            while low < threshold {
                product = u64::from(self.next_u32()) * u64::from(n);
                low = product as u32;
            }
        }
        (product >> 32) as u32
    }
}

/// 64-bit finalizer with full avalanche (SplitMix64 variant 13).
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
