//! Literal byte sampling with a tunable alphabet skew.

use crate::rng::Rng32;

/// Number of entries in the literal lookup table.
pub const TABLE_SIZE: usize = 8192;

const TABLE_MASK: u32 = (TABLE_SIZE as u32) - 1;

/// First and last byte of the printable alphabet used once skew is non-zero.
const SKEWED_FIRST: u8 = b'(';
const SKEWED_LAST: u8 = b'}';
const SKEWED_START: u8 = b'0';

/// Lookup table mapping a 13-bit random index to a literal byte.
///
/// With zero skew the table cycles through all 256 byte values, so sampling is
/// exactly uniform. With positive skew each successive character of a short
/// printable alphabet receives `floor(remaining * skew) + 1` slots, which
/// concentrates mass on the first few characters; a skew of `1.0` fills the
/// whole table with a single byte.
#[derive(Clone)]
pub struct LiteralTable {
    table: Box<[u8; TABLE_SIZE]>,
}

impl LiteralTable {
    /// Builds the table for `skew`, clamped to `0.0..=1.0` (NaN counts as 0).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(skew: f64) -> Self {
        let skew = if skew.is_nan() { 0.0 } else { skew.clamp(0.0, 1.0) };
        let (mut character, first, last) = if skew == 0.0 {
            (0u8, 0u8, u8::MAX)
        } else {
            (SKEWED_START, SKEWED_FIRST, SKEWED_LAST)
        };

        let mut table = Box::new([0u8; TABLE_SIZE]);
        let mut i = 0usize;
        while i < TABLE_SIZE {
            let remaining = TABLE_SIZE - i;
            let weight = (((remaining as f64) * skew) as usize + 1).min(remaining);
            table[i..i + weight].fill(character);
            i += weight;

            character = if character >= last { first } else { character + 1 };
        }

        Self { table }
    }

    /// Draws one literal byte.
    #[inline]
    pub fn sample(&self, rng: &mut Rng32) -> u8 {
        self.table[(rng.next_u32() & TABLE_MASK) as usize]
    }

    /// Number of distinct byte values the table can produce.
    pub fn distinct_values(&self) -> usize {
        let mut seen = [false; 256];
        for &byte in self.table.iter() {
            seen[usize::from(byte)] = true;
        }
        seen.iter().filter(|&&s| s).count()
    }

    /// Raw table contents.
    pub fn as_slice(&self) -> &[u8] {
        &self.table[..]
    }
}

impl std::fmt::Debug for LiteralTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiteralTable")
            .field("distinct_values", &self.distinct_values())
            .finish()
    }
}
