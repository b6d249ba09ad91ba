//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily log file named
//! `sheetstack.log.<date>` in the configured directory (default:
//! `~/.local/share/sheetstack/logs/`). The terminal is owned by the UI, so
//! nothing is ever written to stdout or stderr.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `logging.level`:
//!
//! ```bash
//! RUST_LOG=sheetstack::sheet=debug sheetstack
//! ```

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "sheetstack.log";

/// Install the global subscriber. Returns `None` when logging is disabled.
///
/// The returned guard flushes buffered lines when dropped, so keep it alive
/// until the program exits.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    let dir = expand_home(&config.directory);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok(Some(guard))
}

/// Expand a leading `~` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}
