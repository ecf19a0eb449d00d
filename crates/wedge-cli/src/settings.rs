//! Settings file and the final configuration.
//!
//! The settings file holds per-machine values; command-line arguments
//! override them. Example:
//!
//! ```json
//! { "com_port": "COM3", "mode": "AWID", "baud_rate": 9600 }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};
use wedge_core::{Error, ReadMode, Result};
use wedge_hardware::{SerialConfig, SessionConfig};

use crate::cli::Args;

/// Contents of the settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Serial port of the reader.
    pub com_port: Option<String>,

    /// Read mode name. Kept as text so a bad value falls back to default
    /// instead of rejecting the whole file.
    pub mode: Option<String>,

    /// Baud rate, if the reader is not at 9600.
    pub baud_rate: Option<u32>,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read and `Error::Json` if it
    /// is not valid settings JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings = serde_json::from_str(&text)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    ///
    /// # Errors
    /// Same as [`Settings::load`] for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }
}

/// Everything needed to start the wedge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WedgeConfig {
    pub serial: SerialConfig,
    pub mode: ReadMode,
    pub log_frames: bool,
}

impl WedgeConfig {
    /// Combine arguments and settings.
    ///
    /// - The argument port wins over the settings port.
    /// - The settings mode is used unless the arguments name a mode other
    ///   than `default`.
    /// - Unparseable modes are ignored with a warning.
    pub fn resolve(args: &Args, settings: &Settings) -> Self {
        let port = args
            .port
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .or(settings.com_port.as_deref().map(str::trim))
            .unwrap_or_default();

        let mut serial = SerialConfig::new(port);
        if let Some(baud_rate) = settings.baud_rate {
            serial = serial.with_baud_rate(baud_rate);
        }

        let mode = match args.mode.as_deref().and_then(|m| parse_mode(m, "argument")) {
            Some(mode) if !mode.is_default() => mode,
            _ => settings
                .mode
                .as_deref()
                .and_then(|m| parse_mode(m, "settings"))
                .unwrap_or_default(),
        };

        Self {
            serial,
            mode,
            log_frames: args.log,
        }
    }

    /// Session settings for this configuration.
    pub fn session(&self) -> SessionConfig {
        SessionConfig::new(self.mode).with_frame_log(self.log_frames)
    }
}

fn parse_mode(value: &str, origin: &str) -> Option<ReadMode> {
    match value.parse() {
        Ok(mode) => Some(mode),
        Err(e) => {
            warn!("Ignoring {} mode: {}", origin, e);
            None
        }
    }
}
