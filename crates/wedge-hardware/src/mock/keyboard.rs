//! Mock keystroke sink for testing and development.

use crate::{HardwareError, Result, traits::KeystrokeSink};
use tokio::sync::mpsc;

/// Mock keyboard that records every sequence it is asked to type.
///
/// # Examples
///
/// ```
/// use wedge_hardware::mock::MockKeyboard;
/// use wedge_hardware::traits::KeystrokeSink;
///
/// #[tokio::main]
/// async fn main() -> wedge_hardware::Result<()> {
///     let (mut keyboard, mut handle) = MockKeyboard::new();
///
///     keyboard.send_keys("8:192~").await?;
///     assert_eq!(handle.recv().await.as_deref(), Some("8:192~"));
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockKeyboard {
    /// Channel sender for typed sequences
    keys_tx: mpsc::UnboundedSender<String>,
}

impl MockKeyboard {
    /// Create a new mock keyboard and the handle that observes it.
    pub fn new() -> (Self, MockKeyboardHandle) {
        let (keys_tx, keys_rx) = mpsc::unbounded_channel();
        (Self { keys_tx }, MockKeyboardHandle { keys_rx })
    }
}

impl KeystrokeSink for MockKeyboard {
    async fn send_keys(&mut self, keys: &str) -> Result<()> {
        self.keys_tx
            .send(keys.to_string())
            .map_err(|_| HardwareError::injection_failed("mock keyboard handle dropped"))
    }
}

/// Handle for inspecting what a [`MockKeyboard`] typed.
#[derive(Debug)]
pub struct MockKeyboardHandle {
    keys_rx: mpsc::UnboundedReceiver<String>,
}

impl MockKeyboardHandle {
    /// Wait for the next typed sequence.
    ///
    /// Returns `None` once the keyboard is dropped and nothing is left.
    pub async fn recv(&mut self) -> Option<String> {
        self.keys_rx.recv().await
    }

    /// Collect every sequence typed so far without waiting.
    pub fn drain(&mut self) -> Vec<String> {
        let mut typed = Vec::new();
        while let Ok(keys) = self.keys_rx.try_recv() {
            typed.push(keys);
        }
        typed
    }
}
