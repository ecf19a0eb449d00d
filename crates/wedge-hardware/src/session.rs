//! Wedge session: reader lines in, keystrokes out.
//!
//! The line source runs in its own task and pushes every line into a
//! channel. The consumer loop in [`SessionHandle::run`] takes lines one at a
//! time, applies the session's [`ReadMode`], escapes the result and hands it
//! to the keystroke sink.
//!
//! ```text
//! ┌─────────────┐  RawFrame   ┌──────────────┐  "8:192~"  ┌──────────┐
//! │ LineSource  │────────────►│ SessionHandle│───────────►│  Sink    │
//! │ task        │   (mpsc)    │ ::run        │            │          │
//! └─────────────┘             └──────────────┘            └──────────┘
//! ```
//!
//! A malformed frame is logged and dropped; it never ends the session.
//!
//! # Examples
//!
//! ```
//! use wedge_core::ReadMode;
//! use wedge_hardware::devices::AnyLineSource;
//! use wedge_hardware::mock::{MockKeyboard, MockReader};
//! use wedge_hardware::session::{SessionConfig, WedgeSession};
//!
//! #[tokio::main]
//! async fn main() -> wedge_hardware::Result<()> {
//!     let (reader, reader_handle) = MockReader::new();
//!     let (mut keyboard, mut typed) = MockKeyboard::new();
//!
//!     let mut session = WedgeSession::new(SessionConfig::new(ReadMode::Awid))
//!         .start(AnyLineSource::Mock(reader));
//!
//!     reader_handle.send_line("0400006001\r\n").await?;
//!     drop(reader_handle);
//!
//!     let stats = session.run(&mut keyboard).await?;
//!     assert_eq!(stats.frames_injected, 1);
//!     assert_eq!(typed.drain(), vec!["8:192~".to_string()]);
//!     Ok(())
//! }
//! ```

use crate::devices::AnyLineSource;
use crate::keystrokes::escape_keystrokes;
use crate::traits::{KeystrokeSink, LineSource};
use crate::{HardwareError, Result};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use wedge_core::{RawFrame, ReadMode};

/// Lines buffered between the source task and the consumer loop.
const EVENT_BUFFER: usize = 100;

/// Session settings. Fixed for the lifetime of the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// How lines are turned into keystrokes.
    pub mode: ReadMode,

    /// Report every processed frame at `info` level.
    pub log_frames: bool,
}

impl SessionConfig {
    pub fn new(mode: ReadMode) -> Self {
        Self {
            mode,
            log_frames: false,
        }
    }

    /// Enable the per-frame report.
    pub fn with_frame_log(mut self, log_frames: bool) -> Self {
        self.log_frames = log_frames;
        self
    }
}

/// Frame counters for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Lines received from the source.
    pub frames_received: u64,

    /// Lines typed into the sink.
    pub frames_injected: u64,

    /// Lines dropped because they did not decode.
    pub frames_rejected: u64,
}

#[derive(Debug)]
enum SessionEvent {
    Line(RawFrame),
    SourceFailed(HardwareError),
}

/// Builds a running session from a line source.
#[derive(Debug)]
pub struct WedgeSession {
    config: SessionConfig,
}

impl WedgeSession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Spawn the source task and return the handle that consumes its lines.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(self, source: AnyLineSource) -> SessionHandle {
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let mut tasks = JoinSet::new();
        tasks.spawn(source_task(source, event_tx));

        info!("Wedge session started in {} mode", self.config.mode);

        SessionHandle {
            config: self.config,
            event_rx,
            tasks,
            stats: SessionStats::default(),
        }
    }
}

/// Handle to a running session.
pub struct SessionHandle {
    config: SessionConfig,
    event_rx: mpsc::Receiver<SessionEvent>,
    tasks: JoinSet<()>,
    stats: SessionStats,
}

impl SessionHandle {
    /// Feed every line into `sink` until the source closes.
    ///
    /// Returns the session counters once the source reports a disconnect.
    /// Can be called again after a cancelled run; counters carry over.
    ///
    /// # Errors
    ///
    /// Returns the source's error if it fails for any reason other than a
    /// disconnect, and the sink's error if a sequence cannot be injected.
    pub async fn run<K: KeystrokeSink>(&mut self, sink: &mut K) -> Result<SessionStats> {
        while let Some(event) = self.event_rx.recv().await {
            match event {
                SessionEvent::Line(frame) => self.handle_frame(sink, frame).await?,
                SessionEvent::SourceFailed(e) if e.is_disconnect() => {
                    info!("{}", e);
                    break;
                }
                SessionEvent::SourceFailed(e) => {
                    error!("Reader failed: {}", e);
                    return Err(e);
                }
            }
        }

        Ok(self.stats)
    }

    /// Counters so far.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// The mode this session decodes with.
    pub fn mode(&self) -> ReadMode {
        self.config.mode
    }

    /// Stop the source task and wait for it to finish.
    ///
    /// Dropping the source releases the underlying device.
    pub async fn shutdown(mut self) -> Result<()> {
        self.tasks.abort_all();

        while let Some(result) = self.tasks.join_next().await {
            match result {
                Ok(()) => {}
                Err(e) if e.is_cancelled() => {}
                Err(e) => warn!("Reader task panicked: {}", e),
            }
        }

        info!(
            "Wedge session stopped: {} received, {} injected, {} rejected",
            self.stats.frames_received, self.stats.frames_injected, self.stats.frames_rejected
        );
        Ok(())
    }

    async fn handle_frame<K: KeystrokeSink>(&mut self, sink: &mut K, frame: RawFrame) -> Result<()> {
        self.stats.frames_received += 1;

        let processed = match wedge_rfid::processor::process(self.config.mode, &frame) {
            Ok(processed) => processed,
            Err(e) => {
                self.stats.frames_rejected += 1;
                warn!("Dropped frame {:?}: {}", frame.as_str(), e);
                return Ok(());
            }
        };

        if self.config.log_frames {
            info!("Raw Data: {} Processed Data: {}", frame, processed);
        } else {
            debug!("Raw Data: {} Processed Data: {}", frame, processed);
        }

        sink.send_keys(&escape_keystrokes(&processed)).await?;
        self.stats.frames_injected += 1;
        Ok(())
    }
}

async fn source_task(mut source: AnyLineSource, event_tx: mpsc::Sender<SessionEvent>) {
    match source.get_info().await {
        Ok(info) => info!("Listening on {} ({})", info.name, info.model),
        Err(e) => warn!("Could not query reader info: {}", e),
    }

    loop {
        let event = match source.read_line().await {
            Ok(frame) => SessionEvent::Line(frame),
            Err(e) => {
                let _ = event_tx.send(SessionEvent::SourceFailed(e)).await;
                return;
            }
        };

        if event_tx.send(event).await.is_err() {
            // consumer gone
            return;
        }
    }
}
