//! Constants for the AWID reader and the keyboard wedge.
//!
//! The reader emits one ASCII line per tag presentation. Only the first
//! [`FRAME_HEX_LEN`] characters matter: five hex octets carrying a
//! Wiegand-26 credential.
//!
//! ```text
//!  stream bit:  0 | 1 ........ 8 | 9 ......................... 32 | 33 .. 39
//!               P |  facility    |           card id             |  unused
//! ```

// ============================================================================
// Frame Layout
// ============================================================================

/// Number of bytes in an AWID frame.
pub const FRAME_BYTES: usize = 5;

/// Number of hex characters consulted from each line.
pub const FRAME_HEX_LEN: usize = FRAME_BYTES * 2;

/// Number of bits in the decoded stream.
pub const STREAM_BITS: usize = FRAME_BYTES * 8;

/// Stream position of the (unchecked) leading parity bit.
pub const PARITY_BIT: usize = 0;

/// First stream bit of the facility code.
pub const FACILITY_START: usize = 1;

/// Width of the facility code in bits.
pub const FACILITY_BITS: usize = 8;

/// First stream bit of the card id.
pub const CARD_ID_START: usize = FACILITY_START + FACILITY_BITS;

/// Width of the card id in bits.
pub const CARD_ID_BITS: usize = 24;

/// Largest facility code the frame can carry.
pub const MAX_FACILITY_CODE: u32 = (1 << FACILITY_BITS) - 1;

/// Largest card id the frame can carry.
pub const MAX_CARD_ID: u32 = (1 << CARD_ID_BITS) - 1;

// ============================================================================
// Serial Line Settings
// ============================================================================

/// Baud rate the reader transmits at.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Read timeout for the serial port, in milliseconds.
///
/// Timeouts are not errors; the reader worker just polls again.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 500;

/// Longest line the transport buffers while waiting for a terminator.
///
/// Anything longer is discarded up to the next `\n`.
pub const MAX_LINE_LEN: usize = 256;

// ============================================================================
// Keystroke Output
// ============================================================================

/// Characters the keystroke sink treats as metacharacters.
pub const KEYSTROKE_SPECIAL_CHARS: [char; 6] = ['+', '^', '%', '~', '(', ')'];

/// Token appended after every injected sequence to press Enter.
pub const KEYSTROKE_ENTER: &str = "~";
