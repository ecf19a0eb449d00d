//! RFID keyboard wedge.
//!
//! Reads tag lines from a serial RFID reader, decodes AWID frames to
//! `facility:id` and emits them as keystroke sequences on stdout. Status
//! and logs go to stderr so stdout carries keystrokes only.

mod cli;
mod settings;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wedge_hardware::console::ConsoleSink;
use wedge_hardware::devices::{AnyKeystrokeSink, AnyLineSource};
use wedge_hardware::serial::SerialLineSource;
use wedge_hardware::session::WedgeSession;

use crate::cli::Args;
use crate::settings::{Settings, WedgeConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(log_frames: bool) {
    let default_filter = if log_frames { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args) -> anyhow::Result<()> {
    let settings = Settings::load_or_default(&args.config)
        .with_context(|| format!("Failed to read settings from {}", args.config.display()))?;
    let config = WedgeConfig::resolve(&args, &settings);

    let source = match SerialLineSource::open(&config.serial) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Unable to Open RFID COM Port.");
            return Err(e).with_context(|| format!("Port '{}'", config.serial.port));
        }
    };

    eprintln!("RFID Reader Active");
    eprintln!("Press Ctrl-C to close.");

    let mut handle = WedgeSession::new(config.session()).start(AnyLineSource::Serial(source));
    let mut sink = AnyKeystrokeSink::Console(ConsoleSink::new());

    tokio::select! {
        result = handle.run(&mut sink) => {
            let stats = result.context("Wedge session failed")?;
            info!("Reader closed after {} frames", stats.frames_received);
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl-C")?;
            info!("Close requested");
        }
    }

    handle.shutdown().await?;
    Ok(())
}
