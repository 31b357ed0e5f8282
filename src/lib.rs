// SPDX-License-Identifier: CC0-1.0

//! Byte-array/hexadecimal codec.
//!
//! Converts binary data to hexadecimal text (with optional `0x`/`0X` prefix, case
//! control and partial-range encoding), parses hexadecimal text back into bytes and
//! fixed-width integers, and renders byte buffers as compact or tabular hex dumps.
//!
//! ## Basic Usage
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! use hexy::{Case, ToHex, ToHexString};
//!
//! // Decode an arbitrary length hex string into a vector, with or without the prefix.
//! let bytes = hexy::decode("0xdeadbeef").expect("valid hex digits");
//! assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
//!
//! // And back again.
//! assert_eq!(bytes.to_hex_string(true, Case::Lower), "0xdeadbeef");
//!
//! // Fixed-width integers round-trip through their big-endian hex form.
//! assert_eq!(3735928559u32.to_hex_string(true, Case::Lower), "0xdeadbeef");
//! assert_eq!(hexy::parse::hex_to_u32("0xdeadbeef"), Ok(3735928559));
//! # }
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// Coding conventions.
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod codec;
#[cfg(feature = "std")]
pub mod dump;
mod error;
pub mod parse;
#[cfg(feature = "serde")]
pub mod serde_utils;

#[cfg(feature = "alloc")]
#[doc(inline)]
pub use self::codec::{decode, encode, encode_byte, encode_range, ToHex};
#[doc(inline)]
pub use self::error::Error;
#[cfg(feature = "alloc")]
#[doc(inline)]
pub use self::parse::ToHexString;

/// Reexports of extension traits.
pub mod exts {
    #[cfg(feature = "alloc")]
    pub use super::codec::ToHex;
    #[cfg(feature = "std")]
    pub use super::dump::HexDump;
    #[cfg(feature = "alloc")]
    pub use super::parse::ToHexString;
}

/// Possible case of hex.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Case {
    /// Produce lower-case chars (`[0-9a-f]`).
    ///
    /// This is the default.
    Lower,

    /// Produce upper-case chars (`[0-9A-F]`).
    Upper,
}

impl Default for Case {
    fn default() -> Self { Case::Lower }
}

impl Case {
    /// Returns the encoding table.
    ///
    /// The returned table may only contain displayable ASCII chars.
    #[inline]
    #[rustfmt::skip]
    pub(crate) fn table(self) -> &'static [u8; 16] {
        static LOWER: [u8; 16] = [b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'a', b'b', b'c', b'd', b'e', b'f'];
        static UPPER: [u8; 16] = [b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'A', b'B', b'C', b'D', b'E', b'F'];

        match self {
            Case::Lower => &LOWER,
            Case::Upper => &UPPER,
        }
    }
}

/// Encodes single byte as two ASCII chars using the given table.
///
/// The function guarantees only returning values from the provided table.
#[inline]
pub(crate) fn byte_to_hex(byte: u8, table: &[u8; 16]) -> [u8; 2] {
    [table[usize::from(byte.wrapping_shr(4))], table[usize::from(byte & 0x0F)]]
}
