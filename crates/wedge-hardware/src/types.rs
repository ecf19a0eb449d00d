//! Common types shared across line sources and keystroke sinks.

use serde::{Deserialize, Serialize};
use wedge_core::constants::{DEFAULT_BAUD_RATE, DEFAULT_READ_TIMEOUT_MS};

/// Generic device information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device name (e.g., "COM3", "Mock Reader").
    pub name: String,

    /// Device model identifier.
    pub model: String,

    /// Line speed, for serial devices.
    pub baud_rate: Option<u32>,
}

impl DeviceInfo {
    /// Create a new DeviceInfo with required fields.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
            baud_rate: None,
        }
    }

    /// Set the baud rate.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = Some(baud_rate);
        self
    }
}

/// Serial port settings for the reader.
///
/// Data bits, parity and stop bits are fixed at 8N1; only the port and
/// speed vary between installations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerialConfig {
    /// Port path (e.g., "COM3", "/dev/ttyUSB0").
    pub port: String,

    /// Baud rate.
    pub baud_rate: u32,

    /// Read timeout in milliseconds.
    pub read_timeout_ms: u64,
}

impl SerialConfig {
    /// Create a config for `port` at the reader's default speed.
    pub fn new(port: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }

    /// Set the baud rate.
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_info_builder() {
        let info = DeviceInfo::new("COM3", "Serial RFID Reader").with_baud_rate(9600);

        assert_eq!(info.name, "COM3");
        assert_eq!(info.model, "Serial RFID Reader");
        assert_eq!(info.baud_rate, Some(9600));
    }

    #[test]
    fn test_serial_config_defaults() {
        let config = SerialConfig::new("/dev/ttyUSB0");
        assert_eq!(config.port, "/dev/ttyUSB0");
        assert_eq!(config.baud_rate, 9600);
        assert_eq!(config.read_timeout_ms, DEFAULT_READ_TIMEOUT_MS);

        assert_eq!(config.with_baud_rate(19200).baud_rate, 19200);
    }

    #[test]
    fn test_serial_config_serialization() {
        let config = SerialConfig::new("COM3");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SerialConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
