// SPDX-License-Identifier: CC0-1.0

//! Module for serialization of byte arrays as hex strings.
//!
//! For use with serde's `with` attribute. Human-readable formats get a lower-case hex
//! string, binary formats get the raw bytes.

use alloc::vec::Vec;
use core::fmt;

use crate::codec;
use crate::Case;

/// Serializes `bytes` as a hex string in human-readable formats, as raw bytes otherwise.
pub fn serialize<T, S>(bytes: &T, s: S) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize + AsRef<[u8]>,
    S: serde::Serializer,
{
    // Don't do anything special when not human readable.
    if !s.is_human_readable() {
        serde::Serialize::serialize(bytes, s)
    } else {
        s.serialize_str(&codec::encode(bytes.as_ref(), false, Case::Lower))
    }
}

/// Deserializes a byte vector from a hex string in human-readable formats, from raw
/// bytes otherwise.
///
/// The hex string may or may not carry a `0x`/`0X` prefix.
pub fn deserialize<'de, D>(d: D) -> Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct Visitor;

    impl<'de> serde::de::Visitor<'de> for Visitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an ASCII hex string")
        }

        fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            if let Ok(hex) = core::str::from_utf8(v) {
                codec::decode(hex).map_err(E::custom)
            } else {
                Err(E::invalid_value(serde::de::Unexpected::Bytes(v), &self))
            }
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            codec::decode(v).map_err(E::custom)
        }
    }

    // Don't do anything special when not human readable.
    if !d.is_human_readable() {
        serde::Deserialize::deserialize(d)
    } else {
        d.deserialize_str(Visitor)
    }
}
