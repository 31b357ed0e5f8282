// SPDX-License-Identifier: CC0-1.0

//! Human-readable hex dumps of byte buffers.
//!
//! [`hex_dump`] emits a compact digit string; [`pretty_hex_dump`] a fixed-width table
//! with per-row offsets, hex values and an ASCII column, 16 bytes per row.
//!
//! All lookup tables are immutable after initialization and shared freely across
//! threads.

use std::sync::LazyLock;

use crate::error::Error;

/// Two lower-case hex characters per byte value.
static HEXDUMP_TABLE: [u8; 512] = {
    let digits = b"0123456789abcdef";
    let mut table = [0u8; 512];
    let mut i = 0;
    while i < 256 {
        table[i << 1] = digits[i >> 4];
        table[(i << 1) + 1] = digits[i & 0x0F];
        i += 1;
    }
    table
};

/// The printable ASCII character per byte value, `.` for everything else.
static BYTE2CHAR: [u8; 256] = {
    let mut table = [b'.'; 256];
    let mut i = 0x20;
    while i < 0x7F {
        table[i] = i as u8;
        i += 1;
    }
    table
};

/// Row-offset prefixes for the first 64 KiB of dumped data.
static ROW_PREFIXES: LazyLock<Vec<String>> =
    LazyLock::new(|| (0..(65536usize >> 4)).map(|row| format!("\n|{:08x}|", row << 4)).collect());

/// Padding for the hex column of a partial row, three spaces per missing byte.
const HEX_PADDING: &str = "                                                ";
/// Padding for the ASCII column of a partial row, one space per missing byte.
const BYTE_PADDING: &str = "                ";

const HEADER: &str = concat!(
    "         +-------------------------------------------------+\n",
    "         |  0  1  2  3  4  5  6  7  8  9  a  b  c  d  e  f |\n",
    "+--------+-------------------------------------------------+----------------+",
);
const FOOTER: &str =
    "\n+--------+-------------------------------------------------+----------------+";

/// Renders `length` bytes starting at `from_index` as a compact hex string.
///
/// No separators, no prefix, always lower-case. A zero `length` yields the empty
/// string.
///
/// # Panics
///
/// Panics if `from_index + length` is past the end of the buffer.
pub fn hex_dump(bytes: &[u8], from_index: usize, length: usize) -> String {
    if length == 0 {
        return String::new();
    }
    let mut buf = String::with_capacity(length * 2);
    for &b in &bytes[from_index..from_index + length] {
        let i = usize::from(b) << 1;
        buf.push(char::from(HEXDUMP_TABLE[i]));
        buf.push(char::from(HEXDUMP_TABLE[i + 1]));
    }
    buf
}

/// Renders `length` bytes starting at `from_index` as a fixed-width table of offsets,
/// hex values and ASCII characters.
///
/// A zero `length` yields the empty string with no header or footer at all.
///
/// # Errors
///
/// [`Error::RangeOutOfBounds`] unless `from_index <= length`. Note that the starting
/// offset is checked against the `length` parameter, not the buffer size; callers must
/// pass a meaningful `length` for the check to be useful.
///
/// # Panics
///
/// Panics if the requested range is past the end of the buffer.
pub fn pretty_hex_dump(bytes: &[u8], from_index: usize, length: usize) -> Result<String, Error> {
    if from_index > length {
        return Err(Error::RangeOutOfBounds { from_index, length });
    }
    if length == 0 {
        return Ok(String::new());
    }

    let rows = length / 16 + usize::from(length % 16 != 0) + 4;
    let mut dump = String::with_capacity(rows * 80);
    dump.push_str(HEADER);

    let full_rows = length >> 4;
    let remainder = length & 0xF;

    for row in 0..full_rows {
        let row_start = (row << 4) + from_index;
        push_row_prefix(&mut dump, row, row_start);
        for &b in &bytes[row_start..row_start + 16] {
            push_hex_cell(&mut dump, b);
        }
        dump.push_str(" |");
        for &b in &bytes[row_start..row_start + 16] {
            dump.push(char::from(BYTE2CHAR[usize::from(b)]));
        }
        dump.push('|');
    }

    if remainder != 0 {
        let row_start = (full_rows << 4) + from_index;
        push_row_prefix(&mut dump, full_rows, row_start);
        for &b in &bytes[row_start..row_start + remainder] {
            push_hex_cell(&mut dump, b);
        }
        dump.push_str(&HEX_PADDING[..3 * (16 - remainder)]);
        dump.push_str(" |");
        for &b in &bytes[row_start..row_start + remainder] {
            dump.push(char::from(BYTE2CHAR[usize::from(b)]));
        }
        dump.push_str(&BYTE_PADDING[..16 - remainder]);
        dump.push('|');
    }

    dump.push_str(FOOTER);
    Ok(dump)
}

fn push_hex_cell(dump: &mut String, b: u8) {
    let i = usize::from(b) << 1;
    dump.push(' ');
    dump.push(char::from(HEXDUMP_TABLE[i]));
    dump.push(char::from(HEXDUMP_TABLE[i + 1]));
}

fn push_row_prefix(dump: &mut String, row: usize, row_start: usize) {
    if row < ROW_PREFIXES.len() {
        dump.push_str(&ROW_PREFIXES[row]);
    } else {
        // Past the cache the offset comes from the absolute row start, wrapped at 32 bits.
        dump.push_str(&format!("\n|{:08x}|", (row_start as u64) & 0xFFFF_FFFF));
    }
}

/// Extension trait for dumping whole byte slices.
pub trait HexDump {
    /// Renders the whole buffer as a compact hex string.
    fn hex_dump(&self) -> String;

    /// Renders the whole buffer as a fixed-width table.
    fn pretty_hex_dump(&self) -> String;
}

impl HexDump for [u8] {
    fn hex_dump(&self) -> String { self::hex_dump(self, 0, self.len()) }

    fn pretty_hex_dump(&self) -> String {
        self::pretty_hex_dump(self, 0, self.len()).expect("zero start index is always in range")
    }
}
