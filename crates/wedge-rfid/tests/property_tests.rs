//! Property-based tests for the AWID decoder.
//!
//! These tests use proptest to generate arbitrary lines and verify the
//! decoder's invariants hold for every input, not just the pinned vectors.

use proptest::prelude::*;
use wedge_core::{
    DecodeError,
    constants::{FRAME_HEX_LEN, MAX_CARD_ID, MAX_FACILITY_CODE},
};
use wedge_rfid::awid::{decode, reverse_bits, swap_byte_order};

/// Strategy for generating syntactically valid frames (exactly 10 hex chars).
fn valid_frame() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9A-Fa-f]{10}").expect("Failed to create frame regex strategy")
}

/// Strategy for generating anything after the frame, including metacharacters.
fn trailing_noise() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,20}").expect("Failed to create trailer regex strategy")
}

/// Strategy for generating lines too short to decode.
fn short_line() -> impl Strategy<Value = String> {
    prop::string::string_regex(".{0,9}").expect("Failed to create short line regex strategy")
}

proptest! {
    /// Property: decoding is deterministic.
    #[test]
    fn prop_decode_deterministic(frame in valid_frame()) {
        prop_assert_eq!(decode(&frame), decode(&frame));
    }

    /// Property: decoded fields always fit the Wiegand-26 widths.
    #[test]
    fn prop_fields_in_range(frame in valid_frame()) {
        let tag = decode(&frame).unwrap();
        prop_assert!(tag.facility_code <= MAX_FACILITY_CODE);
        prop_assert!(tag.card_id <= MAX_CARD_ID);
    }

    /// Property: the bit reversals net out to reading stream bits 1..33
    /// MSB first, i.e. plain shifts of the 40-bit frame value.
    #[test]
    fn prop_matches_big_endian_field_extraction(frame in valid_frame()) {
        let value = u64::from_str_radix(&frame, 16).unwrap();
        let tag = decode(&frame).unwrap();

        prop_assert_eq!(u64::from(tag.facility_code), (value >> 31) & 0xFF);
        prop_assert_eq!(u64::from(tag.card_id), (value >> 7) & 0xFF_FFFF);
    }

    /// Property: characters after the first ten never affect the result.
    #[test]
    fn prop_trailing_characters_ignored(frame in valid_frame(), trailer in trailing_noise()) {
        let line = format!("{frame}{trailer}");
        prop_assert_eq!(decode(&line), decode(&frame));
    }

    /// Property: every line shorter than ten characters is rejected as too short.
    #[test]
    fn prop_short_lines_too_short(line in short_line()) {
        let len = line.chars().count();
        prop_assume!(len < FRAME_HEX_LEN);
        prop_assert_eq!(decode(&line), Err(DecodeError::TooShort { len }));
    }

    /// Property: a non-hex character anywhere in the frame is reported at its position.
    #[test]
    fn prop_non_hex_rejected(
        frame in valid_frame(),
        position in 0usize..FRAME_HEX_LEN,
        found in "[G-Zg-z!#%+^~() ]",
    ) {
        let found = found.chars().next().unwrap();
        let mut chars: Vec<char> = frame.chars().collect();
        chars[position] = found;
        let line: String = chars.into_iter().collect();

        prop_assert_eq!(
            decode(&line),
            Err(DecodeError::InvalidHexDigit { position, found })
        );
    }

    /// Property: the parity bit is discarded.
    #[test]
    fn prop_parity_bit_ignored(frame in valid_frame()) {
        let first = u8::from_str_radix(&frame[..2], 16).unwrap();
        let flipped = format!("{:02X}{}", first ^ 0x80, &frame[2..]);
        prop_assert_eq!(decode(&flipped), decode(&frame));
    }

    /// Property: bit-group reversal is self-inverse.
    #[test]
    fn prop_reverse_bits_self_inverse(bits in any::<[bool; 8]>()) {
        prop_assert_eq!(reverse_bits(reverse_bits(bits)), bits);
    }

    /// Property: bit reversal agrees with the integer primitive.
    #[test]
    fn prop_reverse_bits_matches_u8(byte in any::<u8>()) {
        let bits: [bool; 8] = std::array::from_fn(|k| byte & (1 << k) != 0);
        let reversed = reverse_bits(bits);
        let packed = reversed
            .iter()
            .enumerate()
            .fold(0u8, |acc, (k, &bit)| acc | (u8::from(bit) << k));
        prop_assert_eq!(packed, byte.reverse_bits());
    }

    /// Property: byte-order swap is self-inverse.
    #[test]
    fn prop_swap_byte_order_self_inverse(buffer in any::<[u8; 4]>()) {
        prop_assert_eq!(swap_byte_order(swap_byte_order(buffer)), buffer);
        prop_assert_eq!(
            u32::from_le_bytes(swap_byte_order(buffer)),
            u32::from_be_bytes(buffer)
        );
    }
}
