//! Hexadecimal encoding of binary payloads.
//!
//! Everything crossing the public boundary is uppercase hex, two characters
//! per byte, no separators. Decoding accepts either case.

use crate::{Error, Result};

/// Renders each byte as two uppercase hex digits, concatenated.
pub fn encode(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parses a hex string back into bytes.
///
/// Odd-length input and non-hex characters fail with
/// [`Error::InvalidEncoding`] instead of being truncated or misparsed.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    hex::decode(input).map_err(Error::from)
}
