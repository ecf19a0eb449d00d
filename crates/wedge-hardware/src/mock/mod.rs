//! Mock device implementations for testing and development.
//!
//! These devices are driven through channels so tests can feed reader lines
//! and inspect typed keystrokes without a serial port or a desktop session.

pub mod keyboard;
pub mod reader;

// Re-export commonly used types
pub use keyboard::{MockKeyboard, MockKeyboardHandle};
pub use reader::{MockReader, MockReaderHandle};
