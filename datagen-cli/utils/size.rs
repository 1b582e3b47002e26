//! Parsing of size arguments such as `64K` or `1MB`.

use crate::error::{Error, Result};

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Parses a byte count with an optional binary size suffix.
///
/// Accepts a decimal number followed by an optional `K` (KiB), `M` (MiB) or
/// `G` (GiB) and an optional trailing `B`, so `64K`, `64KB` and `65536` are
/// the same size. Suffixes are case-insensitive. A lone `B` means bytes.
///
/// # Parameters
///
/// * `s` - The size string to parse (e.g., "1024", "64K", "1MB", "3G")
///
/// # Returns
///
/// The size in bytes as a [`u64`].
///
/// # Errors
///
/// Returns [`Error::InvalidSize`] in the following cases:
///
/// - The input string is empty
/// - The numeric part is missing or is not a valid [`u64`]
/// - The suffix is not one of K, M, G, optionally followed by B
/// - The result would overflow [`u64`] after applying the multiplier
pub fn parse_size(s: &str) -> Result<u64> {
    let invalid = |reason| Error::InvalidSize {
        value: s.to_string(),
        reason,
    };

    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(invalid("empty size"));
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (number_part, suffix) = trimmed.split_at(split);
    if number_part.is_empty() {
        return Err(invalid("expected a number"));
    }

    let suffix = suffix.to_ascii_uppercase();
    let multiplier = match suffix.strip_suffix('B').unwrap_or(&suffix) {
        "" => 1,
        "K" => KB,
        "M" => MB,
        "G" => GB,
        _ => return Err(invalid("unknown suffix (expected K, M or G)")),
    };

    let number: u64 = number_part
        .parse()
        .map_err(|_| invalid("number too large"))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| invalid("size too large"))
}
