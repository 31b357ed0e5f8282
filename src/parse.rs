// SPDX-License-Identifier: CC0-1.0

//! Prefix utilities and fixed-width integer round-tripping.
//!
//! The prefix helpers are pure string transforms with no hex validation. The integer
//! conversions go through the byte codec: an integer's hex form is its two's-complement
//! base-16 representation at the type's own width, and parsing reinterprets the decoded
//! bytes as a big-endian value of the requested width.

#[cfg(feature = "alloc")]
use alloc::borrow::Cow;
#[cfg(feature = "alloc")]
use alloc::string::String;

#[cfg(feature = "alloc")]
use crate::codec;
#[cfg(feature = "alloc")]
use crate::error::Error;
#[cfg(feature = "alloc")]
use crate::Case;

/// Returns `true` iff `s` starts with the literal `0x` or `0X` prefix.
pub fn has_hex_prefix(s: &str) -> bool { s.starts_with("0x") || s.starts_with("0X") }

/// Strips the hex prefix off `s` if one is present.
///
/// Only the first occurrence is removed: `remove_hex_prefix("0x0x123")` yields
/// `"0x123"`.
pub fn remove_hex_prefix(s: &str) -> &str {
    if let Some(stripped) = s.strip_prefix("0x") {
        stripped
    } else if let Some(stripped) = s.strip_prefix("0X") {
        stripped
    } else {
        s
    }
}

/// Prepends the `0x` prefix unless it is already present.
///
/// Idempotent: applying it twice yields the same string as applying it once.
#[cfg(feature = "alloc")]
pub fn add_hex_prefix(s: &str) -> Cow<'_, str> {
    if has_hex_prefix(s) {
        Cow::Borrowed(s)
    } else {
        let mut owned = String::with_capacity(2 + s.len());
        owned.push_str("0x");
        owned.push_str(s);
        Cow::Owned(owned)
    }
}

/// Returns `true` iff the full string is hex: an optional `0x`/`0X` prefix followed by
/// one or more hex digits and nothing else.
///
/// The empty string and a bare prefix are invalid here even though
/// [`crate::codec::decode`] accepts both and returns an empty buffer; the validator is
/// stricter than the decoder on purpose.
pub fn is_valid_hex(s: &str) -> bool {
    let digits = remove_hex_prefix(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Extension trait for fixed-width integers that can be displayed as hex.
#[cfg(feature = "alloc")]
pub trait ToHexString {
    /// Encodes `self` as hex, optionally with the `0x` prefix.
    ///
    /// The digit string is the value's two's-complement base-16 form at the type's own
    /// width. An odd digit count is padded with one leading zero, in both prefixed and
    /// bare modes, so the output always has a whole number of byte pairs and parses
    /// back through the byte codec. Case applies to the digits only, never to the `0x`
    /// marker.
    fn to_hex_string(&self, use_prefix: bool, case: Case) -> String;
}

macro_rules! impl_to_hex_string {
    ($($ty:ident),* $(,)?) => {
        $(
            #[cfg(feature = "alloc")]
            impl ToHexString for $ty {
                fn to_hex_string(&self, use_prefix: bool, case: Case) -> String {
                    let digits = match case {
                        Case::Lower => alloc::format!("{:x}", self),
                        Case::Upper => alloc::format!("{:X}", self),
                    };
                    let mut out = String::with_capacity(3 + digits.len());
                    if use_prefix {
                        out.push_str("0x");
                    }
                    if digits.len() % 2 != 0 {
                        out.push('0');
                    }
                    out.push_str(&digits);
                    out
                }
            }
        )*
    }
}

impl_to_hex_string!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Reinterprets decoded bytes as a big-endian value of at most `width` bytes.
///
/// Missing leading bytes are treated as zero, so inputs shorter than the full width
/// (including the empty buffer) are accepted.
#[cfg(feature = "alloc")]
fn be_to_u64(bytes: &[u8], width: usize) -> Result<u64, Error> {
    if bytes.len() > width {
        return Err(Error::InvalidLength(2 * width, 2 * bytes.len()));
    }
    let mut ret = 0u64;
    for &b in bytes {
        ret = (ret << 8) | u64::from(b);
    }
    Ok(ret)
}

macro_rules! impl_hex_to_int {
    ($($fn_name:ident, $uty:ident, $ty:ident, $width:expr);* $(;)?) => {
        $(
            #[doc = concat!("Parses the string as hex and reinterprets the bytes as a big-endian `", stringify!($ty), "`.")]
            ///
            /// Input may or may not carry a `0x`/`0X` prefix. Inputs shorter than the
            /// full width are zero-extended; the empty string and a bare prefix parse
            /// as zero.
            ///
            /// # Errors
            ///
            /// Any [`crate::codec::decode`] error, or [`Error::InvalidLength`] if the
            /// input encodes more bytes than the target width holds.
            #[cfg(feature = "alloc")]
            pub fn $fn_name(s: &str) -> Result<$ty, Error> {
                let bytes = codec::decode(s)?;
                // The width check makes the narrowing cast lossless.
                Ok(be_to_u64(&bytes, $width)? as $uty as $ty)
            }
        )*
    }
}

impl_hex_to_int! {
    hex_to_u8, u8, u8, 1;
    hex_to_i8, u8, i8, 1;
    hex_to_u16, u16, u16, 2;
    hex_to_i16, u16, i16, 2;
    hex_to_u32, u32, u32, 4;
    hex_to_i32, u32, i32, 4;
    hex_to_u64, u64, u64, 8;
    hex_to_i64, u64, i64, 8;
}
