//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Settings file read when `--config` is not given.
pub const DEFAULT_SETTINGS_FILE: &str = "rfid-wedge.json";

/// Types RFID tag ids read from a serial reader.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Serial port the reader is attached to (overrides the settings file)
    #[arg(short, long)]
    pub port: Option<String>,

    /// Read mode: default, awid or raw
    #[arg(short, long)]
    pub mode: Option<String>,

    /// Report every processed frame
    #[arg(short, long)]
    pub log: bool,

    /// Settings file
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,
}
