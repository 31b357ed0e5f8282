// SPDX-License-Identifier: CC0-1.0

//! Hex codec error type.

use core::fmt;

/// Hex codec error.
///
/// Every failure in this crate is some form of invalid argument; the variants classify
/// which argument was bad and carry the offending value. Failures are synchronous and
/// final, there is nothing to retry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Error {
    /// Non-hexadecimal character.
    InvalidChar(u8),
    /// Purported hex string had odd length.
    OddLengthString(usize),
    /// Hex string encodes more bytes than the target integer width holds
    /// (max digits, got digits).
    InvalidLength(usize, usize),
    /// Start index past the end of a non-empty buffer.
    StartOutOfBounds {
        /// The requested start index.
        start: usize,
        /// Size of the buffer.
        size: usize,
    },
    /// Dump range precondition `from_index <= length` violated.
    RangeOutOfBounds {
        /// The requested start index.
        from_index: usize,
        /// The length parameter the start index is checked against.
        length: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidChar(ch) => write!(f, "invalid hex character {}", ch),
            Error::OddLengthString(ell) => write!(f, "odd hex string length {}", ell),
            Error::InvalidLength(ell, ell2) =>
                write!(f, "bad hex string length {} (expected no more than {})", ell2, ell),
            Error::StartOutOfBounds { start, size } => write!(
                f,
                "start ({}) must be smaller than the size of the byte array ({})",
                start, size
            ),
            Error::RangeOutOfBounds { from_index, length } =>
                write!(f, "expected: 0 <= from_index({}) <= length({})", from_index, length),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use self::Error::*;

        match *self {
            InvalidChar(_)
            | OddLengthString(_)
            | InvalidLength(_, _)
            | StartOutOfBounds { .. }
            | RangeOutOfBounds { .. } => None,
        }
    }
}
