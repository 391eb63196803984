//! Bootstring parameters and shared helpers.
//!
//! These are the Punycode parameters from RFC 3492 section 5: base 36 with
//! the alphabet a-z (0-25) + 0-9 (26-35).

use crate::error::Error;

/// Base for variable-length integer encoding.
pub(crate) const BASE: u64 = 36;

/// Minimum threshold value.
pub(crate) const T_MIN: u64 = 1;

/// Maximum threshold value.
pub(crate) const T_MAX: u64 = 26;

/// Skew factor for bias adaptation.
pub(crate) const SKEW: u64 = 38;

/// Damping factor for first adaptation.
pub(crate) const DAMP: u64 = 700;

/// Initial bias value.
pub(crate) const INITIAL_BIAS: u64 = 72;

/// First non-basic code point.
pub(crate) const INITIAL_N: u32 = 0x80;

/// Largest Unicode code point.
pub(crate) const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Separates the basic prefix from the encoded suffix (`-`).
pub(crate) const DELIMITER: u32 = 0x2D;

const SHIFT_BASE: u64 = BASE - T_MIN;

/// Deltas above this are scaled down during bias adaptation.
const MAX_DELTA: u64 = (SHIFT_BASE * T_MAX) / 2;

/// Returns `true` for basic (ASCII) code points, which Punycode copies
/// through unchanged.
///
/// ```
/// assert!(punycode::is_basic('a' as u32));
/// assert!(!punycode::is_basic('ü' as u32));
/// ```
pub fn is_basic(cp: u32) -> bool {
    cp < INITIAL_N
}

/// Adapt bias after encoding/decoding a delta (RFC 3492 section 6.1).
///
/// - delta: the delta value just processed
/// - num_points: number of code points handled so far, including this one
/// - first_time: whether this is the first adaptation
pub(crate) fn adapt_bias(mut delta: u64, num_points: u64, first_time: bool) -> u64 {
    // Scale delta down
    delta /= if first_time { DAMP } else { 2 };

    // Compensate for the length of the string
    delta += delta / num_points;

    let mut k = 0u64;
    while delta > MAX_DELTA {
        delta /= SHIFT_BASE;
        k += BASE;
    }

    k + ((SHIFT_BASE + 1) * delta) / (delta + SKEW)
}

/// Encode a digit value (0-35) as its lowercase ASCII code point.
///
/// Callers only ever pass digits below `BASE`.
pub(crate) fn encode_digit(d: u32) -> u32 {
    debug_assert!(u64::from(d) < BASE, "digit {} out of range", d);
    if d < 26 {
        u32::from(b'a') + d
    } else {
        // '0' is 48 and represents digit 26
        d + 22
    }
}

/// Decode an ASCII code point to its digit value (0-35).
///
/// Letters are accepted in either case.
pub(crate) fn decode_digit(cp: u32) -> Result<u32, Error> {
    match char::from_u32(cp) {
        Some(c @ '0'..='9') => Ok(c as u32 - 22),
        Some(c @ 'a'..='z') => Ok(c as u32 - 'a' as u32),
        Some(c @ 'A'..='Z') => Ok(c as u32 - 'A' as u32),
        _ => Err(Error::InvalidCharacter(cp)),
    }
}

/// Calculate the threshold for digit position `k` under `bias`.
pub(crate) fn threshold(k: u64, bias: u64) -> u64 {
    if k <= bias + T_MIN {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}
