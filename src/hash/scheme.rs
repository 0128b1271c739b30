//! Hash function variants mapping a key to a 0-based slot index.

use crate::keys::decimal_len;

/// Hash scheme, chosen once per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashScheme {
    /// `h(k) = k mod capacity`.
    Modulo,
    /// Central digits of the decimal representation of `k²`.
    MidSquare,
    /// Leading digits of the decimal representation of `k`.
    Truncation,
}

impl HashScheme {
    /// Initial slot for `key` in a table of `capacity` slots.
    ///
    /// Mid-square and truncation extract `decimal_len(capacity) - 1`
    /// digits; an empty extraction (capacity below 10) parses to 0, so
    /// every key lands in slot 0 for such tables.
    pub fn slot(&self, key: u32, capacity: usize) -> usize {
        match self {
            HashScheme::Modulo => key as usize % capacity,
            HashScheme::MidSquare => {
                let square = (u64::from(key) * u64::from(key)).to_string();
                let central = central_digits(&square, extract_width(capacity));
                parse_digits(central) % capacity
            }
            HashScheme::Truncation => {
                let decimal = key.to_string();
                let width = extract_width(capacity).min(decimal.len());
                parse_digits(&decimal[..width]) % capacity
            }
        }
    }
}

/// Digits to extract for mid-square/truncation: one fewer than the
/// capacity's decimal width.
fn extract_width(capacity: usize) -> usize {
    usize::from(decimal_len(capacity as u32)) - 1
}

/// `width` digits from the center of `digits`, start offset rounding
/// toward the front.
fn central_digits(digits: &str, width: usize) -> &str {
    let start = digits.len().saturating_sub(width) / 2;
    let end = (start + width).min(digits.len());
    &digits[start..end]
}

/// Empty extraction parses to 0.
fn parse_digits(digits: &str) -> usize {
    digits.parse().unwrap_or(0)
}
