//! Error types for Punycode encoding and decoding.

/// Errors that can occur during Punycode encoding or decoding.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input contains a code point outside the accepted range.
    ///
    /// Encoding accepts `0..=0x10FFFF`; decoding accepts ASCII only.
    #[error("invalid input: code point U+{code_point:04X} at index {index} is out of range")]
    InvalidInput {
        /// Position of the offending code point in the input.
        index: usize,
        /// The offending code point.
        code_point: u32,
    },

    /// A non-alphanumeric character appeared where an encoded digit was expected.
    #[error("invalid character in encoded portion: U+{0:04X}")]
    InvalidCharacter(u32),

    /// Encoded data ended in the middle of a variable-length integer.
    #[error("invalid encoding: encoded data ended unexpectedly")]
    UnexpectedEnd,

    /// Decoded code point is beyond U+10FFFF.
    #[error("invalid encoding: decoded code point exceeds U+10FFFF")]
    CodePointOutOfRange,

    /// Decoded code point is a surrogate and cannot be held in a `String`.
    #[error("invalid encoding: decoded U+{0:04X} is not a Unicode scalar value")]
    NotScalarValue(u32),
}

/// Broad classes of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The argument was rejected before the algorithm ran.
    InvalidInput,
    /// A character outside `[0-9A-Za-z]` appeared in the encoded portion.
    InvalidCharacter,
    /// The encoded portion is truncated or describes an impossible code point.
    InvalidEncoding,
}

impl Error {
    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::InvalidCharacter(_) => ErrorKind::InvalidCharacter,
            Error::UnexpectedEnd | Error::CodePointOutOfRange | Error::NotScalarValue(_) => {
                ErrorKind::InvalidEncoding
            }
        }
    }
}

/// Result alias for Punycode operations.
pub type Result<T> = std::result::Result<T, Error>;
