//! Serial-port line source.
//!
//! The port is read on a dedicated blocking thread which splits the byte
//! stream into lines and forwards them over a channel, so the async side
//! never blocks on the port.

use crate::{HardwareError, Result, traits::LineSource, types::{DeviceInfo, SerialConfig}};
use serialport::{DataBits, Parity, StopBits};
use std::io::{self, BufRead, BufReader, Read};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use wedge_core::{RawFrame, constants::MAX_LINE_LEN};

/// Lines buffered between the port thread and the session.
const LINE_BUFFER: usize = 32;

/// Reader attached to a serial port at 8N1.
///
/// # Examples
///
/// ```no_run
/// use wedge_hardware::serial::SerialLineSource;
/// use wedge_hardware::traits::LineSource;
/// use wedge_hardware::types::SerialConfig;
///
/// # async fn example() -> wedge_hardware::Result<()> {
/// let mut source = SerialLineSource::open(&SerialConfig::new("/dev/ttyUSB0"))?;
/// let frame = source.read_line().await?;
/// println!("{}", frame);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SerialLineSource {
    line_rx: mpsc::Receiver<Result<RawFrame>>,
    config: SerialConfig,
}

impl SerialLineSource {
    /// Open the port and start reading lines.
    ///
    /// The reader thread exits on its own once this source is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`HardwareError::ConfigurationError`] if no port is configured
    /// and [`HardwareError::InitializationFailed`] if the port cannot be opened.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        if config.port.trim().is_empty() {
            return Err(HardwareError::configuration("Port Not Configured"));
        }

        let port = serialport::new(config.port.as_str(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .open()
            .map_err(|e| {
                HardwareError::initialization_failed(format!("{}: {}", config.port, e))
            })?;

        info!("Opened {} at {} baud", config.port, config.baud_rate);

        let (line_tx, line_rx) = mpsc::channel(LINE_BUFFER);
        let port_name = config.port.clone();
        std::thread::Builder::new()
            .name(format!("serial-{}", config.port))
            .spawn(move || read_lines(port, port_name, line_tx))?;

        Ok(Self {
            line_rx,
            config: config.clone(),
        })
    }
}

impl LineSource for SerialLineSource {
    async fn read_line(&mut self) -> Result<RawFrame> {
        match self.line_rx.recv().await {
            Some(line) => line,
            None => Err(HardwareError::disconnected(self.config.port.clone())),
        }
    }

    async fn get_info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo::new(self.config.port.clone(), "Serial RFID Reader")
            .with_baud_rate(self.config.baud_rate))
    }
}

/// Port thread body: forward complete lines until the port fails or the
/// receiving side goes away.
///
/// At most [`MAX_LINE_LEN`] bytes are buffered while waiting for `\n`; a
/// longer line is dropped through its terminator.
fn read_lines<R: Read>(port: R, port_name: String, line_tx: mpsc::Sender<Result<RawFrame>>) {
    let mut reader = BufReader::new(port);
    let mut line = Vec::new();
    // skipping the tail of an over-long line
    let mut discarding = false;

    loop {
        let limit = (MAX_LINE_LEN + 1 - line.len()) as u64;
        match (&mut reader).take(limit).read_until(b'\n', &mut line) {
            Ok(0) => {
                if !line.is_empty() && !discarding {
                    debug!(
                        "{}: dropping unterminated line {:?}",
                        port_name,
                        String::from_utf8_lossy(&line)
                    );
                }
                let _ = line_tx.blocking_send(Err(HardwareError::disconnected(port_name)));
                return;
            }
            Ok(_) if line.last() == Some(&b'\n') => {
                if discarding {
                    discarding = false;
                    line.clear();
                    continue;
                }
                let text = String::from_utf8_lossy(&line).into_owned();
                line.clear();
                debug!("{}: received {:?}", port_name, text);

                if line_tx.blocking_send(Ok(RawFrame::new(text))).is_err() {
                    debug!("{}: receiver dropped, closing port", port_name);
                    return;
                }
                continue;
            }
            // partial line; the rest follows after the next read
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {
                // bytes read before the timeout stay in `line`
                if line_tx.is_closed() {
                    debug!("{}: receiver dropped, closing port", port_name);
                    return;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                error!("{}: read failed: {}", port_name, e);
                let _ = line_tx.blocking_send(Err(HardwareError::Io(e)));
                return;
            }
        }

        if line.len() > MAX_LINE_LEN {
            if !discarding {
                warn!(
                    "{}: discarding line longer than {} bytes",
                    port_name, MAX_LINE_LEN
                );
            }
            discarding = true;
            line.clear();
        }
    }
}
