//! Device layer for the RFID keyboard wedge.
//!
//! The wedge reads lines from a reader, turns each into the text to type
//! and hands that text to a keystroke sink. This crate provides both ends
//! and the session that connects them:
//!
//! - [`LineSource`]: where lines come from ([`serial::SerialLineSource`],
//!   [`mock::MockReader`]).
//! - [`KeystrokeSink`]: where escaped text goes ([`console::ConsoleSink`],
//!   [`mock::MockKeyboard`]).
//! - [`session`]: the consumer loop applying the session's read mode.
//!
//! # Example
//!
//! ```no_run
//! use wedge_core::ReadMode;
//! use wedge_hardware::console::ConsoleSink;
//! use wedge_hardware::devices::AnyLineSource;
//! use wedge_hardware::serial::SerialLineSource;
//! use wedge_hardware::session::{SessionConfig, WedgeSession};
//! use wedge_hardware::types::SerialConfig;
//!
//! #[tokio::main]
//! async fn main() -> wedge_hardware::Result<()> {
//!     let source = SerialLineSource::open(&SerialConfig::new("/dev/ttyUSB0"))?;
//!     let mut handle = WedgeSession::new(SessionConfig::new(ReadMode::Default))
//!         .start(AnyLineSource::Serial(source));
//!
//!     handle.run(&mut ConsoleSink::new()).await?;
//!     handle.shutdown().await
//! }
//! ```
//!
//! # Thread Safety
//!
//! All traits require `Send + Sync`. The source runs in its own task; the
//! decoder is called synchronously from the consumer loop.

pub mod console;
pub mod devices;
pub mod error;
pub mod keystrokes;
pub mod mock;
pub mod serial;
pub mod session;
pub mod traits;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{HardwareError, Result};
pub use keystrokes::escape_keystrokes;
pub use session::{SessionConfig, SessionHandle, SessionStats, WedgeSession};
pub use traits::{KeystrokeSink, LineSource};
pub use types::{DeviceInfo, SerialConfig};
