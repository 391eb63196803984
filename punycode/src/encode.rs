//! Punycode encoding implementation.

use crate::bootstring::{
    adapt_bias, encode_digit, is_basic, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
    MAX_CODE_POINT,
};
use crate::error::{Error, Result};

/// Check if a code point sequence needs encoding.
///
/// Only sequences with at least one non-basic code point do; everything
/// else passes through [`encode`] unchanged.
pub fn needs_encoding(input: &[u32]) -> bool {
    !input.iter().all(|&cp| is_basic(cp))
}

/// Encode a sequence of Unicode code points as Punycode.
///
/// The result holds the basic code points in their original order,
/// followed by a `-` if there were any, followed by the encoded
/// insertions. No `xn--` prefix is added. Input without any non-basic
/// code points is returned unchanged.
///
/// # Examples
///
/// ```
/// let input: Vec<u32> = "münchen".chars().map(u32::from).collect();
/// let encoded = punycode::encode(&input).unwrap();
/// let expected: Vec<u32> = "mnchen-3ya".chars().map(u32::from).collect();
/// assert_eq!(encoded, expected);
///
/// // Code points beyond U+10FFFF are rejected
/// assert!(punycode::encode(&[0x110000]).is_err());
/// ```
pub fn encode(input: &[u32]) -> Result<Vec<u32>> {
    if let Some(index) = input.iter().position(|&cp| cp > MAX_CODE_POINT) {
        return Err(Error::InvalidInput {
            index,
            code_point: input[index],
        });
    }

    Ok(encode_code_points(input))
}

/// Encode a string as Punycode.
///
/// A `str` only ever holds Unicode scalar values, so unlike [`encode`]
/// this cannot fail. ASCII-only input is returned unchanged.
///
/// ```
/// assert_eq!(punycode::encode_str("bücher"), "bcher-kva");
/// assert_eq!(punycode::encode_str("example"), "example");
/// ```
pub fn encode_str(input: &str) -> String {
    if input.is_ascii() {
        return input.to_string();
    }

    let code_points: Vec<u32> = input.chars().map(u32::from).collect();

    // Every emitted code point is ASCII
    encode_code_points(&code_points)
        .into_iter()
        .filter_map(char::from_u32)
        .collect()
}

/// Internal encoding implementation. Input is already range-checked.
fn encode_code_points(input: &[u32]) -> Vec<u32> {
    // Basic code points are copied through in order
    let mut output: Vec<u32> = input.iter().copied().filter(|&cp| is_basic(cp)).collect();
    let basic_len = output.len();

    if basic_len == input.len() {
        log::trace!("encode: {} basic code points, nothing to do", basic_len);
        return output;
    }

    if basic_len > 0 {
        output.push(DELIMITER);
    }

    encode_insertions(input, basic_len, &mut output);

    log::trace!(
        "encode: {} code points ({} basic) -> {}",
        input.len(),
        basic_len,
        output.len()
    );

    output
}

/// Encode the non-basic code points of `input` as deltas.
///
/// Code points are handled in increasing numeric order rather than in
/// order of appearance. Each delta folds together the jump in code point
/// value and the insertion position.
fn encode_insertions(input: &[u32], basic_len: usize, output: &mut Vec<u32>) {
    let basic_len = basic_len as u64;

    let mut n = INITIAL_N;
    let mut bias = INITIAL_BIAS;
    let mut delta: u64 = 0;
    let mut handled = basic_len;

    // Everything below n is handled, so the smallest code point >= n is the
    // next one to insert, and there is none once all of them are
    while let Some(m) = input.iter().copied().filter(|&cp| cp >= n).min() {
        delta += u64::from(m - n) * (handled + 1);

        for &cp in input {
            if cp < m {
                delta += 1;
            } else if cp == m {
                encode_varint(output, delta, bias);
                bias = adapt_bias(delta, handled + 1, handled == basic_len);
                delta = 0;
                handled += 1;
            }
        }

        delta += 1;
        n = m + 1;
    }
}

/// Encode a value as a generalized variable-length integer.
fn encode_varint(output: &mut Vec<u32>, mut value: u64, bias: u64) {
    let mut k = BASE;

    loop {
        let t = threshold(k, bias);

        if value < t {
            output.push(encode_digit(value as u32));
            break;
        }

        let digit = t + (value - t) % (BASE - t);
        output.push(encode_digit(digit as u32));

        value = (value - t) / (BASE - t);
        k += BASE;
    }
}
