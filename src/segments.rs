//! Seven-segment digit encoding.
//!
//! Patterns are active-low: a `0` bit lights a segment. Bits 0-6 drive
//! segments a-g and bit 7 drives the decimal point.
//!
//! ```text
//!     a
//!   f   b
//!     g
//!   e   c
//!     d   .
//! ```

/// Active-low segment patterns for the decimal digits 0-9.
///
/// The decimal-point bit is left clear here; [`encode`] forces it off.
pub const DIGIT_PATTERNS: [u8; 10] = [64, 121, 36, 48, 25, 18, 2, 120, 0, 16];

/// Decimal-point bit. Set means the point is dark.
pub const DECIMAL_POINT_OFF: u8 = 0x80;

/// All segments dark, decimal point included.
pub const BLANK: u8 = 0xFF;

/// Encodes a digit into its display pattern with the decimal point off.
///
/// Only the low nibble of `digit` is used. Values 10-15 have no table entry
/// and encode as [`BLANK`].
#[inline]
pub fn encode(digit: u8) -> u8 {
    match DIGIT_PATTERNS.get(usize::from(digit & 0xF)) {
        Some(pattern) => pattern | DECIMAL_POINT_OFF,
        None => BLANK,
    }
}

/// Returns the all-segments-off pattern.
#[inline]
pub const fn blank() -> u8 {
    BLANK
}

/// Returns true if `pattern` is the encoding of one of the digits 0-9.
pub fn is_digit_pattern(pattern: u8) -> bool {
    DIGIT_PATTERNS
        .iter()
        .any(|&p| p | DECIMAL_POINT_OFF == pattern)
}
