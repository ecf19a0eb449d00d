use crate::{Result, error::Error};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How lines from the reader are turned into keystrokes.
///
/// Chosen once per session and never changed while the session runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReadMode {
    /// Decode as AWID (the reader's factory output).
    #[default]
    Default,
    /// Decode as AWID.
    Awid,
    /// Forward the line untouched.
    Raw,
}

impl ReadMode {
    /// Returns `true` if frames are run through the AWID decoder.
    #[inline]
    #[must_use]
    pub fn decodes(self) -> bool {
        matches!(self, ReadMode::Default | ReadMode::Awid)
    }

    /// Returns `true` if this is the default mode.
    #[inline]
    #[must_use]
    pub fn is_default(self) -> bool {
        matches!(self, ReadMode::Default)
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReadMode::Default => write!(f, "DEFAULT"),
            ReadMode::Awid => write!(f, "AWID"),
            ReadMode::Raw => write!(f, "RAW"),
        }
    }
}

impl std::str::FromStr for ReadMode {
    type Err = Error;

    /// Parse a mode name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEFAULT" => Ok(ReadMode::Default),
            "AWID" => Ok(ReadMode::Awid),
            "RAW" => Ok(ReadMode::Raw),
            _ => Err(Error::InvalidReadMode(s.to_string())),
        }
    }
}

/// Decoded credential: facility code and card id.
///
/// Displays as `facility:id` in decimal without padding, which is the
/// exact text typed into the focused application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagIdentity {
    pub facility_code: u32,
    pub card_id: u32,
}

impl fmt::Display for TagIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.facility_code, self.card_id)
    }
}

/// One line received from the reader, terminator already stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFrame {
    /// Line text.
    pub text: String,

    /// When the line arrived.
    pub received_at: DateTime<Utc>,
}

impl RawFrame {
    /// Create a frame stamped with the current time.
    ///
    /// Any trailing CR/LF left by the transport is removed.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_timestamp(text, Utc::now())
    }

    /// Create a frame with an explicit timestamp (useful for replay).
    pub fn with_timestamp(text: impl Into<String>, received_at: DateTime<Utc>) -> Self {
        let mut text = text.into();
        let trimmed = text.trim_end_matches(['\r', '\n']).len();
        text.truncate(trimmed);
        Self { text, received_at }
    }

    /// Get the line text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for RawFrame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
