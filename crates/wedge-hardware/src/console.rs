//! Console keystroke sink.

use crate::{HardwareError, Result, traits::KeystrokeSink};
use tokio::io::AsyncWriteExt;

/// Sink that writes each keystroke sequence as one line on stdout.
///
/// Stands in for OS-level key injection, which this crate does not do; pipe
/// the output into whatever injects keys on the target platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl KeystrokeSink for ConsoleSink {
    async fn send_keys(&mut self, keys: &str) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        let mut line = String::with_capacity(keys.len() + 1);
        line.push_str(keys);
        line.push('\n');

        stdout
            .write_all(line.as_bytes())
            .await
            .map_err(|e| HardwareError::injection_failed(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| HardwareError::injection_failed(e.to_string()))
    }
}
