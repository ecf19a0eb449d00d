use thiserror::Error;

use crate::constants::FRAME_HEX_LEN;

/// Failure to decode one AWID frame.
///
/// Both kinds are local and recoverable: the frame is dropped and the
/// caller keeps listening.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Frame too short: need {expected} hex characters, got {len}", expected = FRAME_HEX_LEN)]
    TooShort { len: usize },

    #[error("Invalid hex digit {found:?} at position {position}")]
    InvalidHexDigit { position: usize, found: char },
}

#[derive(Error, Debug)]
pub enum Error {
    // Frame errors
    #[error(transparent)]
    Decode(#[from] DecodeError),

    // Configuration errors
    #[error("Invalid read mode: {0}")]
    InvalidReadMode(String),

    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
