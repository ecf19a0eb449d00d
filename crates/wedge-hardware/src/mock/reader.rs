//! Mock line reader for testing and development.

use crate::{HardwareError, Result, traits::LineSource, types::DeviceInfo};
use tokio::sync::mpsc;
use wedge_core::RawFrame;

/// Mock reader that emits whatever lines its handle sends.
///
/// The reader reports [`HardwareError::Disconnected`] once every handle has
/// been dropped and the queued lines are drained.
///
/// # Examples
///
/// ```
/// use wedge_hardware::mock::MockReader;
/// use wedge_hardware::traits::LineSource;
///
/// #[tokio::main]
/// async fn main() -> wedge_hardware::Result<()> {
///     let (mut reader, handle) = MockReader::new();
///
///     handle.send_line("0400006001\r\n").await?;
///
///     let frame = reader.read_line().await?;
///     assert_eq!(frame.as_str(), "0400006001");
///
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct MockReader {
    /// Channel receiver for lines
    line_rx: mpsc::Receiver<RawFrame>,

    /// Device name
    name: String,
}

impl MockReader {
    /// Create a new mock reader with the default name.
    pub fn new() -> (Self, MockReaderHandle) {
        Self::with_name("Mock RFID Reader".to_string())
    }

    /// Create a new mock reader with a custom name.
    pub fn with_name(name: String) -> (Self, MockReaderHandle) {
        let (line_tx, line_rx) = mpsc::channel(32);

        let reader = Self {
            line_rx,
            name: name.clone(),
        };

        let handle = MockReaderHandle {
            line_tx,
            name,
        };

        (reader, handle)
    }
}

impl LineSource for MockReader {
    async fn read_line(&mut self) -> Result<RawFrame> {
        self.line_rx
            .recv()
            .await
            .ok_or_else(|| HardwareError::disconnected(self.name.clone()))
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.name.clone(), "Mock"))
    }
}

/// Handle for feeding lines to a [`MockReader`].
#[derive(Debug, Clone)]
pub struct MockReaderHandle {
    /// Channel sender for lines
    line_tx: mpsc::Sender<RawFrame>,

    /// Device name
    name: String,
}

impl MockReaderHandle {
    /// Send one line, exactly as the reader would transmit it.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader has been dropped.
    pub async fn send_line(&self, line: impl Into<String>) -> Result<()> {
        self.line_tx
            .send(RawFrame::new(line))
            .await
            .map_err(|_| HardwareError::disconnected(self.name.clone()))
    }

    /// Send several lines in order.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader has been dropped.
    pub async fn send_lines<I, S>(&self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.send_line(line).await?;
        }
        Ok(())
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }
}
