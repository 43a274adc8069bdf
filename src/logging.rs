//! Optional file logging.
//!
//! The game owns the terminal, so log lines cannot go to stderr. Logging is
//! off unless `METEOR_MAYHEM_LOG` names a file; `RUST_LOG` sets the filter
//! (default `info`).

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Environment variable holding the log file path.
pub const LOG_FILE_ENV: &str = "METEOR_MAYHEM_LOG";

/// Log file requested through the environment, if any.
pub fn log_file_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Install the logger when a log file was requested. Returns the file used.
pub fn init() -> Result<Option<PathBuf>> {
    let Some(path) = log_file_from_env() else {
        return Ok(None);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    Ok(Some(path))
}
