// SPDX-License-Identifier: CC0-1.0

//! Behavioral tests for the codec: buffer round-trips, range encoding, prefix helpers
//! and fixed-width integer conversions.

#![cfg(feature = "alloc")]

use hexy::parse::{
    self, hex_to_i16, hex_to_i32, hex_to_i64, hex_to_i8, hex_to_u16, hex_to_u32, hex_to_u64,
    hex_to_u8,
};
use hexy::{decode, encode, encode_byte, encode_range, Case, Error, ToHex, ToHexString};

#[test]
fn decoded_sizes() {
    assert_eq!(decode("0x").unwrap().len(), 0);
    assert_eq!(decode("ff").unwrap().len(), 1);
    assert_eq!(decode("ffaa").unwrap().len(), 2);
    assert_eq!(decode("ffaabb").unwrap().len(), 3);
    assert_eq!(decode("ffaabb44").unwrap().len(), 4);
    assert_eq!(decode("0xffaabb4455").unwrap().len(), 5);
    assert_eq!(decode("0xffaabb445566").unwrap().len(), 6);
    assert_eq!(decode("ffaabb44556677").unwrap().len(), 7);
}

#[test]
fn encode_single_digit_bytes() {
    assert_eq!(encode_byte(0, Case::Lower), "00");
    assert_eq!(encode_byte(1, Case::Lower), "01");
    assert_eq!(encode_byte(15, Case::Lower), "0f");
}

#[test]
fn encode_double_digit_bytes() {
    assert_eq!(encode_byte(16, Case::Lower), "10");
    assert_eq!(encode_byte(42, Case::Lower), "2a");
    assert_eq!(encode_byte(255, Case::Lower), "ff");
}

#[test]
fn buffer_roundtrip() {
    assert_eq!(encode(&decode("00").unwrap(), true, Case::Lower), "0x00");
    assert_eq!(encode(&decode("ff").unwrap(), true, Case::Lower), "0xff");
    assert_eq!(encode(&decode("abcdef").unwrap(), true, Case::Lower), "0xabcdef");
    assert_eq!(encode(&decode("0xaa12456789bb").unwrap(), true, Case::Lower), "0xaa12456789bb");
}

#[test]
fn buffer_roundtrip_all_prefix_case_combinations() {
    let bytes: Vec<u8> = (0u8..=255).collect();
    for use_prefix in [true, false] {
        for case in [Case::Lower, Case::Upper] {
            assert_eq!(decode(&encode(&bytes, use_prefix, case)).unwrap(), bytes);
        }
    }
}

#[test]
fn encode_length_clamps_silently() {
    let buf = decode("abcdef").unwrap();
    assert_eq!(encode_range(&buf, 0, 0, true, Case::Lower).unwrap(), "0x");
    assert_eq!(encode_range(&buf, 0, 1, true, Case::Lower).unwrap(), "0xab");
    assert_eq!(encode_range(&buf, 0, 2, true, Case::Lower).unwrap(), "0xabcd");
    assert_eq!(encode_range(&buf, 0, 3, true, Case::Lower).unwrap(), "0xabcdef");
    assert_eq!(encode_range(&buf, 0, 32, true, Case::Lower).unwrap(), "0xabcdef");

    let buf = decode("0xaa12456789bb").unwrap();
    assert_eq!(encode_range(&buf, 0, 6, true, Case::Lower).unwrap(), "0xaa12456789bb");
    assert_eq!(encode_range(&buf, 0, 9, true, Case::Lower).unwrap(), "0xaa12456789bb");
}

#[test]
fn encode_start_works() {
    let buf = decode("abcdef").unwrap();
    assert_eq!(encode_range(&buf, 1, 1, true, Case::Lower).unwrap(), "0x");
    assert_eq!(encode_range(&buf, 1, 2, true, Case::Lower).unwrap(), "0xcd");
    assert_eq!(encode_range(&buf, 1, 3, true, Case::Lower).unwrap(), "0xcdef");
    assert_eq!(encode_range(&buf, 1, 32, true, Case::Lower).unwrap(), "0xcdef");

    let buf = decode("0xaa12456789bb").unwrap();
    assert_eq!(encode_range(&buf, 3, 6, true, Case::Lower).unwrap(), "0x6789bb");
    assert_eq!(encode_range(&buf, 2, 9, true, Case::Lower).unwrap(), "0x456789bb");
}

#[test]
fn encode_start_past_non_empty_buffer_fails() {
    let buf = decode("abcdef").unwrap();
    assert_eq!(
        encode_range(&buf, 5, 9, true, Case::Lower),
        Err(Error::StartOutOfBounds { start: 5, size: 3 })
    );
}

#[test]
fn encode_without_prefix_and_in_upper_case() {
    let buf = decode("abcdef").unwrap();
    assert_eq!(encode(&buf, false, Case::Lower), "abcdef");
    assert_eq!(encode(&buf, false, Case::Upper), "ABCDEF");
    assert_eq!(encode(&buf, true, Case::Upper), "0xABCDEF");
}

#[test]
fn slice_extension_matches_free_function() {
    let buf = decode("0xcafebabe").unwrap();
    assert_eq!(buf.to_hex_string(true, Case::Lower), encode(&buf, true, Case::Lower));
    assert_eq!(buf.to_hex_string(false, Case::Upper), "CAFEBABE");
}

#[test]
fn prefix_is_ignored_by_decode() {
    assert_eq!(decode("0xab"), decode("ab"));
}

#[test]
fn empty_and_bare_prefix_decode_to_empty_buffer() {
    assert_eq!(decode(""), Ok(Vec::new()));
    assert_eq!(decode("0x"), Ok(Vec::new()));
}

#[test]
fn odd_digit_count_fails() {
    assert_eq!(decode("0xa"), Err(Error::OddLengthString(1)));
}

#[test]
fn invalid_hex_character_fails() {
    assert_eq!(decode("0xgg"), Err(Error::InvalidChar(b'g')));
}

#[test]
fn prefix_helpers() {
    assert_eq!(parse::add_hex_prefix("123"), "0x123");
    assert_eq!(parse::add_hex_prefix(&parse::add_hex_prefix("123")), "0x123");

    assert_eq!(parse::remove_hex_prefix("123"), "123");
    assert_eq!(parse::remove_hex_prefix("0x123"), "123");
    assert_eq!(parse::remove_hex_prefix("0x0x123"), "0x123");
}

#[test]
fn valid_hex_predicate() {
    assert!(parse::is_valid_hex("0x00"));
    assert!(parse::is_valid_hex("0xabcdef123456"));

    assert!(!parse::is_valid_hex("q"));
    assert!(!parse::is_valid_hex(""));
    assert!(!parse::is_valid_hex("0x+"));
    assert!(!parse::is_valid_hex("0xgg"));
}

#[test]
fn integer_to_hex_pinned_forms() {
    assert_eq!(0u8.to_hex_string(false, Case::Lower), "00");
    assert_eq!(0u8.to_hex_string(true, Case::Lower), "0x00");
    assert_eq!(1u8.to_hex_string(true, Case::Lower), "0x01");
    assert_eq!(10u8.to_hex_string(true, Case::Lower), "0x0a");
    assert_eq!(10u8.to_hex_string(true, Case::Upper), "0x0A");
    assert_eq!(255u8.to_hex_string(true, Case::Lower), "0xff");
    assert_eq!(256u16.to_hex_string(true, Case::Lower), "0x0100");
    assert_eq!(1257u16.to_hex_string(true, Case::Upper), "0x04E9");
    assert_eq!(1257u16.to_hex_string(false, Case::Upper), "04E9");
}

macro_rules! check_int_roundtrip {
    ($($test_name:ident, $ty:ident, $parse:path);* $(;)?) => {
        $(
            #[test]
            fn $test_name() {
                for v in [$ty::MIN, $ty::MAX, 0 as $ty, 1 as $ty] {
                    for use_prefix in [true, false] {
                        for case in [Case::Lower, Case::Upper] {
                            let hex = v.to_hex_string(use_prefix, case);
                            assert_eq!($parse(&hex), Ok(v), "value {} encoded as {}", v, hex);
                        }
                    }
                }
            }
        )*
    }
}

check_int_roundtrip! {
    int_roundtrip_u8, u8, hex_to_u8;
    int_roundtrip_i8, i8, hex_to_i8;
    int_roundtrip_u16, u16, hex_to_u16;
    int_roundtrip_i16, i16, hex_to_i16;
    int_roundtrip_u32, u32, hex_to_u32;
    int_roundtrip_i32, i32, hex_to_i32;
    int_roundtrip_u64, u64, hex_to_u64;
    int_roundtrip_i64, i64, hex_to_i64;
}

#[test]
fn integer_parse_zero_extends_narrow_input() {
    assert_eq!(hex_to_u16("01"), Ok(1));
    assert_eq!(hex_to_i64("0xff"), Ok(255));
}
