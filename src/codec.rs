// SPDX-License-Identifier: CC0-1.0

//! Byte buffer to hex text conversion and back.
//!
//! Encoding is total and deterministic over (bytes, start, length, prefix, case);
//! decoding accepts an optional `0x`/`0X` prefix and case-insensitive digits and fails
//! on odd digit counts or non-hex characters.

#[cfg(feature = "alloc")]
use alloc::string::String;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "alloc")]
use crate::byte_to_hex;
use crate::error::Error;
#[cfg(feature = "alloc")]
use crate::parse::remove_hex_prefix;
#[cfg(feature = "alloc")]
use crate::Case;

/// Encodes a single byte as two hex characters, high nibble first.
#[cfg(feature = "alloc")]
pub fn encode_byte(byte: u8, case: Case) -> String {
    let pair = byte_to_hex(byte, case.table());
    let mut out = String::with_capacity(2);
    out.push(char::from(pair[0]));
    out.push(char::from(pair[1]));
    out
}

/// Encodes the whole buffer as hex, optionally preceded by the `0x` prefix.
///
/// Case applies to the digits only; the prefix marker is always the literal `0x`.
#[cfg(feature = "alloc")]
pub fn encode(bytes: &[u8], use_prefix: bool, case: Case) -> String {
    encode_to_string(bytes, 0, bytes.len(), use_prefix, case)
}

/// Encodes the bytes from `start` up to `length` (exclusive), optionally prefixed.
///
/// `length` bounds the byte *index*, not the output count: `encode_range(b, 1, 3, ..)`
/// encodes `b[1]` and `b[2]`. A `length` larger than the buffer silently encodes only
/// what exists.
///
/// # Errors
///
/// [`Error::StartOutOfBounds`] if the buffer is non-empty and `start` is past its end.
#[cfg(feature = "alloc")]
pub fn encode_range(
    bytes: &[u8],
    start: usize,
    length: usize,
    use_prefix: bool,
    case: Case,
) -> Result<String, Error> {
    if !bytes.is_empty() && start >= bytes.len() {
        return Err(Error::StartOutOfBounds { start, size: bytes.len() });
    }
    let end = length.min(bytes.len());
    Ok(encode_to_string(bytes, start, end, use_prefix, case))
}

/// Encodes `bytes[start..end]` into an exactly preallocated string.
#[cfg(feature = "alloc")]
fn encode_to_string(bytes: &[u8], start: usize, end: usize, use_prefix: bool, case: Case) -> String {
    let table = case.table();
    let digits = 2 * end.saturating_sub(start);
    let mut out = String::with_capacity(digits + if use_prefix { 2 } else { 0 });
    if use_prefix {
        out.push_str("0x");
    }
    if start < end {
        for &byte in &bytes[start..end] {
            let pair = byte_to_hex(byte, table);
            out.push(char::from(pair[0]));
            out.push(char::from(pair[1]));
        }
    }
    out
}

/// Decodes a hex string into bytes.
///
/// Exactly one leading `0x` or `0X` prefix is stripped; digits are case-insensitive.
/// The empty string and a bare prefix decode to an empty vector.
///
/// # Errors
///
/// [`Error::OddLengthString`] if the digit count is odd, [`Error::InvalidChar`] at the
/// first byte outside `[0-9a-fA-F]`.
#[cfg(feature = "alloc")]
pub fn decode(s: &str) -> Result<Vec<u8>, Error> {
    let digits = remove_hex_prefix(s);
    if digits.is_empty() {
        return Ok(Vec::new());
    }
    if digits.len() % 2 != 0 {
        return Err(Error::OddLengthString(digits.len()));
    }

    let mut out = Vec::with_capacity(digits.len() / 2);
    let mut b = 0u8;
    for (idx, c) in digits.bytes().enumerate() {
        b = (b << 4) | hex_digit(c)?;
        if (idx & 1) == 1 {
            out.push(b);
            b = 0;
        }
    }
    Ok(out)
}

/// Converts a hex character into its nibble value.
///
/// # Errors
///
/// [`Error::InvalidChar`] for bytes outside `[0-9a-fA-F]`; the error carries the
/// offending byte.
pub fn hex_digit(c: u8) -> Result<u8, Error> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(Error::InvalidChar(c)),
    }
}

/// Extension trait for byte slices that can be displayed as hex.
#[cfg(feature = "alloc")]
pub trait ToHex {
    /// Encodes `self` as hex, optionally with the `0x` prefix.
    fn to_hex_string(&self, use_prefix: bool, case: Case) -> String;
}

#[cfg(feature = "alloc")]
impl ToHex for [u8] {
    fn to_hex_string(&self, use_prefix: bool, case: Case) -> String {
        encode(self, use_prefix, case)
    }
}
