//! Punycode: Bootstring encoding of Unicode for internationalized domain labels.
//!
//! Punycode (RFC 3492) represents an arbitrary sequence of Unicode code
//! points using only ASCII letters, digits and `-`. The basic (ASCII) code
//! points are copied through in order; every other code point is encoded
//! as a delta over a self-adapting variable-length integer.
//!
//! This crate works on flat code point sequences. Adding or stripping the
//! `xn--` prefix, splitting domain names into labels, case folding and
//! normalization are left to the caller.
//!
//! # Key Properties
//!
//! - Roundtrip: `decode(encode(x)) == x` whenever `x` has a non-ASCII code point
//! - ASCII-only input passes through [`encode`] unchanged
//! - Decoding accepts encoded digits in either letter case
//!
//! # Examples
//!
//! ```
//! use punycode::{decode_str, encode_str};
//!
//! assert_eq!(encode_str("münchen"), "mnchen-3ya");
//! assert_eq!(decode_str("mnchen-3ya").unwrap(), "münchen");
//!
//! // ASCII passes through unchanged
//! assert_eq!(encode_str("example"), "example");
//! ```
//!
//! The code point API accepts anything up to U+10FFFF, including
//! surrogates:
//!
//! ```
//! use punycode::{decode, encode};
//!
//! let encoded = encode(&[0x61, 0xD800]).unwrap();
//! assert_eq!(decode(&encoded).unwrap(), vec![0x61, 0xD800]);
//! ```

mod bootstring;
mod decode;
mod encode;
mod error;

pub use bootstring::is_basic;
pub use decode::{decode, decode_str};
pub use encode::{encode, encode_str, needs_encoding};
pub use error::{Error, ErrorKind, Result};
