//! Device trait definitions.
//!
//! A [`LineSource`] delivers reader lines, a [`KeystrokeSink`] receives the
//! text to type. The session sits between the two and owns no device state
//! of its own.
//!
//! All traits use native `async fn` methods (Edition 2024 RPITIT), so they
//! are not object-safe; use the enum wrappers in [`devices`](crate::devices)
//! for dynamic dispatch.

#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::types::DeviceInfo;
use wedge_core::RawFrame;

/// A source of newline-terminated reader output.
///
/// # Examples
///
/// ```no_run
/// use wedge_hardware::traits::LineSource;
/// use wedge_hardware::error::Result;
///
/// async fn next_text<S: LineSource>(source: &mut S) -> Result<String> {
///     let frame = source.read_line().await?;
///     Ok(frame.text)
/// }
/// ```
pub trait LineSource: Send + Sync {
    /// Wait for the next complete line.
    ///
    /// The returned frame never contains the line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::Disconnected`](crate::HardwareError::Disconnected)
    /// once the source can produce no more lines, or another error if the
    /// transport fails.
    async fn read_line(&mut self) -> Result<RawFrame>;

    /// Get device information.
    async fn get_info(&self) -> Result<DeviceInfo>;
}

/// A destination for keystroke sequences.
///
/// Sequences arrive already escaped for the sink's metacharacters, with the
/// Enter token appended (see [`keystrokes`](crate::keystrokes)).
pub trait KeystrokeSink: Send + Sync {
    /// Deliver one keystroke sequence.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::InjectionFailed`](crate::HardwareError::InjectionFailed)
    /// if the sequence could not be delivered.
    async fn send_keys(&mut self, keys: &str) -> Result<()>;
}
