//! Enum wrappers for device dispatch.
//!
//! Native `async fn` in traits is not object-safe, so `Box<dyn LineSource>`
//! is not an option. These enums give concrete dispatch over every source
//! and sink the wedge knows about.
//!
//! # Examples
//!
//! ```
//! use wedge_hardware::devices::AnyLineSource;
//! use wedge_hardware::mock::MockReader;
//!
//! let (reader, _handle) = MockReader::new();
//! let source = AnyLineSource::Mock(reader);
//! ```

use crate::console::ConsoleSink;
use crate::mock::{MockKeyboard, MockReader};
use crate::serial::SerialLineSource;
use crate::traits::{KeystrokeSink, LineSource};
use crate::{DeviceInfo, Result};
use wedge_core::RawFrame;

/// Enum wrapper for line source dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyLineSource {
    /// Reader on a serial port.
    Serial(SerialLineSource),

    /// Mock reader for development and testing.
    Mock(MockReader),
}

impl LineSource for AnyLineSource {
    async fn read_line(&mut self) -> Result<RawFrame> {
        match self {
            Self::Serial(device) => device.read_line().await,
            Self::Mock(device) => device.read_line().await,
        }
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        match self {
            Self::Serial(device) => device.get_info().await,
            Self::Mock(device) => device.get_info().await,
        }
    }
}

/// Enum wrapper for keystroke sink dispatch.
#[derive(Debug)]
#[non_exhaustive]
pub enum AnyKeystrokeSink {
    /// Writes sequences to stdout.
    Console(ConsoleSink),

    /// Mock keyboard for development and testing.
    Mock(MockKeyboard),
}

impl KeystrokeSink for AnyKeystrokeSink {
    async fn send_keys(&mut self, keys: &str) -> Result<()> {
        match self {
            Self::Console(sink) => sink.send_keys(keys).await,
            Self::Mock(sink) => sink.send_keys(keys).await,
        }
    }
}
