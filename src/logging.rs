//! Log setup.
//!
//! The TUI owns the terminal, so logs only go to a file. Without a log file
//! no subscriber is installed and tracing macros are no-ops.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file.
pub const LOG_FILE_ENV: &str = "RUNNERDECK_LOG";
/// Environment variable holding the log filter (e.g. `debug`, `runnerdeck=trace`).
pub const LOG_LEVEL_ENV: &str = "RUNNERDECK_LOG_LEVEL";

/// Resolve the log file: explicit flag first, then `RUNNERDECK_LOG`.
pub fn resolve_log_file(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
        .filter(|p| !p.as_os_str().is_empty())
}

/// Build the filter from `RUNNERDECK_LOG_LEVEL`, defaulting to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a file-backed subscriber. Returns false when no log file is set.
pub fn init(log_file: Option<&Path>) -> Result<bool> {
    let Some(path) = resolve_log_file(log_file) else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging to {}", path.display());
    Ok(true)
}
