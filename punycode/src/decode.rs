//! Punycode decoding implementation.

use crate::bootstring::{
    adapt_bias, decode_digit, is_basic, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
    MAX_CODE_POINT,
};
use crate::error::{Error, Result};

/// Decode a Punycode sequence back to Unicode code points.
///
/// Input must be ASCII with any `xn--` prefix already removed. Everything
/// before the last `-` is copied through as-is; everything after it is
/// the encoded portion. Letters in the encoded portion may be either case.
///
/// # Examples
///
/// ```
/// use punycode::{decode, Error};
///
/// let input: Vec<u32> = "mnchen-3ya".chars().map(u32::from).collect();
/// let expected: Vec<u32> = "münchen".chars().map(u32::from).collect();
/// assert_eq!(decode(&input).unwrap(), expected);
///
/// // '@' is not a valid digit
/// assert_eq!(decode(&['@' as u32]), Err(Error::InvalidCharacter(0x40)));
/// ```
pub fn decode(input: &[u32]) -> Result<Vec<u32>> {
    if let Some(index) = input.iter().position(|&cp| !is_basic(cp)) {
        return Err(Error::InvalidInput {
            index,
            code_point: input[index],
        });
    }

    // Basic code points sit before the last delimiter, if there is one
    let (mut output, encoded) = match input.iter().rposition(|&cp| cp == DELIMITER) {
        Some(pos) => (input[..pos].to_vec(), &input[pos + 1..]),
        None => (Vec::new(), input),
    };

    let basic_len = output.len();
    decode_insertions(encoded, &mut output)?;

    log::trace!(
        "decode: {} code points ({} basic) -> {}",
        input.len(),
        basic_len,
        output.len()
    );

    Ok(output)
}

/// Decode a Punycode string back to Unicode.
///
/// Fails with [`Error::NotScalarValue`] if the encoding describes a
/// surrogate code point, since a `String` cannot hold one.
///
/// ```
/// assert_eq!(punycode::decode_str("bcher-kva").unwrap(), "bücher");
/// assert_eq!(punycode::decode_str("BCHER-KVA").unwrap(), "BüCHER");
/// ```
pub fn decode_str(input: &str) -> Result<String> {
    if let Some((index, c)) = input.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        return Err(Error::InvalidInput {
            index,
            code_point: u32::from(c),
        });
    }

    let code_points: Vec<u32> = input.bytes().map(u32::from).collect();

    decode(&code_points)?
        .into_iter()
        .map(|cp| char::from_u32(cp).ok_or(Error::NotScalarValue(cp)))
        .collect()
}

/// Decode the encoded portion, inserting each code point into `output`.
fn decode_insertions(encoded: &[u32], output: &mut Vec<u32>) -> Result<()> {
    let mut digits = encoded.iter().copied().peekable();
    let mut n = u64::from(INITIAL_N);
    let mut bias = INITIAL_BIAS;
    let mut i: u64 = 0;
    let mut first_time = true;

    while digits.peek().is_some() {
        let prev_i = i;
        i = decode_varint(&mut digits, i, bias)?;

        let len = output.len() as u64 + 1;
        bias = adapt_bias(i - prev_i, len, first_time);
        first_time = false;

        n = n
            .checked_add(i / len)
            .filter(|&n| n <= u64::from(MAX_CODE_POINT))
            .ok_or(Error::CodePointOutOfRange)?;
        i %= len;

        log::trace!("decode: insert U+{:04X} at {}", n, i);
        // n <= MAX_CODE_POINT and i < len, so both casts are lossless
        output.insert(i as usize, n as u32);
        i += 1;
    }

    Ok(())
}

/// Decode one generalized variable-length integer, accumulating into `i`.
///
/// Arithmetic that would leave `u64` can only describe a code point
/// beyond U+10FFFF, so it is reported as such.
fn decode_varint<I>(digits: &mut I, mut i: u64, bias: u64) -> Result<u64>
where
    I: Iterator<Item = u32>,
{
    let mut w: u64 = 1;
    let mut k = BASE;

    loop {
        let cp = digits.next().ok_or(Error::UnexpectedEnd)?;
        let digit = u64::from(decode_digit(cp)?);

        // i += digit * w
        i = digit
            .checked_mul(w)
            .and_then(|dw| i.checked_add(dw))
            .ok_or(Error::CodePointOutOfRange)?;

        let t = threshold(k, bias);
        if digit < t {
            return Ok(i);
        }

        // w *= (BASE - t)
        w = w
            .checked_mul(BASE - t)
            .ok_or(Error::CodePointOutOfRange)?;
        k += BASE;
    }
}
