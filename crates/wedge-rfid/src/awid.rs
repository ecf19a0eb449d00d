//! AWID (Wiegand-26) frame decoder.
//!
//! The reader reports each tag as a line of hex text. The first ten
//! characters are five octets; listed most-significant bit first they form
//! a 40-bit stream:
//!
//! ```text
//!  bit  0      parity (not checked)
//!  bits 1..9   facility code, 8 bits
//!  bits 9..33  card id, 24 bits
//!  bits 33..40 ignored
//! ```
//!
//! The reader's bit order is the mirror image of the host's LSB-first bit
//! packing, so every field goes through an explicit reversal before it is
//! packed into an integer. The reversal steps must be kept exactly as they
//! are: a wrong bit order still produces a plausible-looking but wrong tag.
//!
//! # Examples
//!
//! ```
//! use wedge_rfid::awid::decode;
//!
//! let tag = decode("0400006001").unwrap();
//! assert_eq!(tag.facility_code, 8);
//! assert_eq!(tag.card_id, 192);
//! ```

use wedge_core::{
    DecodeError, TagIdentity,
    constants::{
        CARD_ID_BITS, CARD_ID_START, FACILITY_BITS, FACILITY_START, FRAME_BYTES, FRAME_HEX_LEN,
        PARITY_BIT, STREAM_BITS,
    },
};

/// Decode one raw AWID line into a tag identity.
///
/// Only the first ten characters are read; anything after them is ignored.
/// The function is pure and may be called from any thread.
///
/// # Errors
///
/// - [`DecodeError::TooShort`] if the line has fewer than ten characters.
/// - [`DecodeError::InvalidHexDigit`] if one of the first ten characters is
///   not a hex digit.
pub fn decode(raw: &str) -> Result<TagIdentity, DecodeError> {
    let bytes = parse_frame_bytes(raw)?;
    let stream = BitStream::from_bytes(&bytes);

    Ok(TagIdentity {
        facility_code: stream.facility_code(),
        card_id: stream.card_id(),
    })
}

/// Parse the first ten characters of `raw` as five hex octets.
///
/// # Errors
///
/// Same as [`decode`]. Length is checked before content, so any line shorter
/// than ten characters is `TooShort` whatever it contains.
pub fn parse_frame_bytes(raw: &str) -> Result<[u8; FRAME_BYTES], DecodeError> {
    let len = raw.chars().take(FRAME_HEX_LEN).count();
    if len < FRAME_HEX_LEN {
        return Err(DecodeError::TooShort { len });
    }

    let mut bytes = [0u8; FRAME_BYTES];
    for (position, found) in raw.chars().take(FRAME_HEX_LEN).enumerate() {
        let nibble = found
            .to_digit(16)
            .ok_or(DecodeError::InvalidHexDigit { position, found })?;
        // high nibble first within each octet
        bytes[position / 2] = (bytes[position / 2] << 4) | nibble as u8;
    }

    Ok(bytes)
}

/// The 40 frame bits in reader order.
///
/// Bit `8*i + k` of the stream is bit `7 - k` of frame byte `i`, i.e. each
/// byte is listed from its most-significant to its least-significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitStream([bool; STREAM_BITS]);

impl BitStream {
    /// Build the stream from the five frame bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; FRAME_BYTES]) -> Self {
        let mut bits = [false; STREAM_BITS];
        for (i, byte) in bytes.iter().enumerate() {
            for k in 0..8 {
                bits[8 * i + k] = byte & (0x80 >> k) != 0;
            }
        }
        Self(bits)
    }

    /// Get one stream bit.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 40 or more.
    #[must_use]
    pub fn bit(&self, index: usize) -> bool {
        self.0[index]
    }

    /// All stream bits in order.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    /// The leading parity bit.
    ///
    /// Exposed for diagnostics only; the decoder never validates it.
    #[must_use]
    pub fn parity(&self) -> bool {
        self.0[PARITY_BIT]
    }

    /// Facility code from stream bits 1..9.
    ///
    /// The field is reversed and then packed LSB first, which leaves stream
    /// bit 1 as the most significant bit of the result.
    #[must_use]
    pub fn facility_code(&self) -> u32 {
        let field: [bool; FACILITY_BITS] = self.field(FACILITY_START);
        pack_lsb_first(&reverse_bits(field))
    }

    /// Card id from stream bits 9..33.
    ///
    /// The field is cut into three bytes in stream order. Each byte is
    /// bit-reversed and packed, the bytes fill the low three slots of a
    /// four-byte buffer whose high slot stays zero, and the buffer is
    /// byte-swapped before being read as a little-endian `u32`.
    #[must_use]
    pub fn card_id(&self) -> u32 {
        let field: [bool; CARD_ID_BITS] = self.field(CARD_ID_START);

        let mut buffer = [0u8; 4];
        for (i, chunk) in field.chunks_exact(8).enumerate() {
            let mut group = [false; 8];
            group.copy_from_slice(chunk);
            buffer[i + 1] = pack_lsb_first(&reverse_bits(group)) as u8;
        }

        u32::from_le_bytes(swap_byte_order(buffer))
    }

    fn field<const N: usize>(&self, start: usize) -> [bool; N] {
        let mut field = [false; N];
        field.copy_from_slice(&self.0[start..start + N]);
        field
    }
}

/// Reverse the order of a fixed group of bits.
///
/// Self-inverse: applying it twice gives back the input.
#[must_use]
pub fn reverse_bits<const N: usize>(mut bits: [bool; N]) -> [bool; N] {
    bits.reverse();
    bits
}

/// Swap a four-byte buffer between little- and big-endian order.
///
/// Self-inverse: applying it twice gives back the input.
#[must_use]
pub fn swap_byte_order(mut buffer: [u8; 4]) -> [u8; 4] {
    buffer.reverse();
    buffer
}

/// Pack up to 32 bits into an integer, first bit least significant.
#[must_use]
pub fn pack_lsb_first(bits: &[bool]) -> u32 {
    debug_assert!(bits.len() <= 32, "at most 32 bits fit in a u32");
    bits.iter()
        .enumerate()
        .fold(0, |acc, (j, &bit)| acc | (u32::from(bit) << j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0400006001", 8, 192)]
    #[case("0000000000", 0, 0)]
    #[case("FFFFFFFFFF", 255, 16_777_215)]
    #[case("8123456789", 2, 4_623_055)]
    #[case("0A0B0C0D0E", 20, 1_447_962)]
    #[case("1234ABCDEF", 36, 6_903_707)]
    #[case("01FE00FF80", 3, 16_515_583)]
    #[case("2C4A3F1E80", 88, 9_731_645)]
    fn test_known_vectors(#[case] raw: &str, #[case] facility: u32, #[case] card: u32) {
        let tag = decode(raw).unwrap();
        assert_eq!(tag.facility_code, facility);
        assert_eq!(tag.card_id, card);
    }

    #[test]
    fn test_lowercase_hex() {
        assert_eq!(decode("abcdef0123").unwrap(), decode("ABCDEF0123").unwrap());
        assert_eq!(decode("abcdef0123").unwrap().to_string(), "87:10214914");
    }

    #[test]
    fn test_trailing_characters_ignored() {
        let expected = decode("0400006001").unwrap();
        assert_eq!(decode("0400006001XYZ").unwrap(), expected);
        assert_eq!(decode("0400006001 garbage +^%").unwrap(), expected);
    }

    #[test]
    fn test_parity_bit_not_checked() {
        // 0x04 and 0x84 differ only in stream bit 0
        assert_eq!(decode("8400006001").unwrap(), decode("0400006001").unwrap());
    }

    #[test]
    fn test_bits_after_card_id_ignored() {
        // last byte 0x01 vs 0x7F: stream bit 32 is 0 in both
        assert_eq!(decode("040000607F").unwrap(), decode("0400006001").unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("040000600")]
    #[case("zzzzzzzzz")]
    fn test_too_short(#[case] raw: &str) {
        let len = raw.chars().count();
        assert_eq!(decode(raw), Err(DecodeError::TooShort { len }));
    }

    #[test]
    fn test_too_short_counts_characters_not_bytes() {
        // nine characters, eighteen bytes
        let raw = "ééééééééé";
        assert_eq!(decode(raw), Err(DecodeError::TooShort { len: 9 }));
    }

    #[rstest]
    #[case("G400006001", 0, 'G')]
    #[case("04000060 1", 8, ' ')]
    #[case("040000600x", 9, 'x')]
    #[case("0400é06001", 4, 'é')]
    fn test_invalid_hex_digit(#[case] raw: &str, #[case] position: usize, #[case] found: char) {
        assert_eq!(
            decode(raw),
            Err(DecodeError::InvalidHexDigit { position, found })
        );
    }

    #[test]
    fn test_parse_frame_bytes() {
        assert_eq!(
            parse_frame_bytes("0400006001").unwrap(),
            [0x04, 0x00, 0x00, 0x60, 0x01]
        );
    }

    #[test]
    fn test_bit_stream_msb_first_per_byte() {
        let stream = BitStream::from_bytes(&[0x80, 0x01, 0x00, 0x00, 0x00]);
        assert!(stream.bit(0));
        assert!(!stream.bit(7));
        assert!(!stream.bit(8));
        assert!(stream.bit(15));
        assert_eq!(stream.as_slice().iter().filter(|&&b| b).count(), 2);
        assert!(stream.parity());
    }

    #[test]
    fn test_facility_code_msb_is_stream_bit_one() {
        // stream bit 1 set => 0x40 in the first byte
        let stream = BitStream::from_bytes(&[0x40, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(stream.facility_code(), 128);
        assert_eq!(stream.card_id(), 0);
    }

    #[test]
    fn test_card_id_msb_is_stream_bit_nine() {
        // stream bit 9 => second byte, 0x40
        let stream = BitStream::from_bytes(&[0x00, 0x40, 0x00, 0x00, 0x00]);
        assert_eq!(stream.facility_code(), 0);
        assert_eq!(stream.card_id(), 1 << 23);

        // stream bit 32 => last byte, 0x80
        let stream = BitStream::from_bytes(&[0x00, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!(stream.card_id(), 1);
    }

    #[test]
    fn test_reverse_bits() {
        let bits = [true, false, false, true, true, false, true, true];
        let reversed = reverse_bits(bits);
        assert_eq!(reversed, [true, true, false, true, true, false, false, true]);
        assert_eq!(reverse_bits(reversed), bits);
    }

    #[test]
    fn test_swap_byte_order() {
        let buffer = [0x00, 0x12, 0x34, 0x56];
        assert_eq!(swap_byte_order(buffer), [0x56, 0x34, 0x12, 0x00]);
        assert_eq!(swap_byte_order(swap_byte_order(buffer)), buffer);
    }

    #[test]
    fn test_pack_lsb_first() {
        assert_eq!(pack_lsb_first(&[]), 0);
        assert_eq!(pack_lsb_first(&[true]), 1);
        assert_eq!(pack_lsb_first(&[false, false, false, true]), 8);
        assert_eq!(pack_lsb_first(&[true; 8]), 255);
    }

    #[test]
    fn test_decode_is_repeatable() {
        let first = decode("1234ABCDEF").unwrap();
        for _ in 0..10 {
            assert_eq!(decode("1234ABCDEF").unwrap(), first);
        }
    }
}
