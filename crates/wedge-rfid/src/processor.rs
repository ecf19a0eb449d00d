//! Read-mode dispatch for received lines.

use wedge_core::{DecodeError, RawFrame, ReadMode};

use crate::awid;

/// Produce the text to type for one received line.
///
/// `Raw` returns the line unchanged; the decoding modes return the
/// `facility:id` form of the decoded tag.
///
/// # Errors
///
/// Returns the decoder's error when a decoding mode gets a malformed line.
/// `Raw` never fails.
///
/// # Examples
///
/// ```
/// use wedge_core::ReadMode;
/// use wedge_rfid::process_frame;
///
/// assert_eq!(process_frame(ReadMode::Awid, "0400006001").unwrap(), "8:192");
/// assert_eq!(process_frame(ReadMode::Raw, "0400006001").unwrap(), "0400006001");
/// ```
pub fn process_frame(mode: ReadMode, raw: &str) -> Result<String, DecodeError> {
    if mode.decodes() {
        Ok(awid::decode(raw)?.to_string())
    } else {
        Ok(raw.to_string())
    }
}

/// Same as [`process_frame`] for a [`RawFrame`] from a line source.
pub fn process(mode: ReadMode, frame: &RawFrame) -> Result<String, DecodeError> {
    process_frame(mode, frame.as_str())
}
