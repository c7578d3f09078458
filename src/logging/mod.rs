//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to
//! `lifegrid.log` in the configured log directory (default:
//! `~/.local/share/lifegrid/logs/`). When logging is disabled no subscriber
//! is installed and every event is dropped.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;
use tracing::Level;

const LOG_FILE: &str = "lifegrid.log";

/// Install the global subscriber. Returns the log file path, if any.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let level = parse_level(&config.level);
    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

/// Unknown level names fall back to `info`.
fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::INFO)
}
