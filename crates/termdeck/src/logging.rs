//! File logging bootstrap.
//!
//! Logs go to rotating files under `~/.local/state/termdeck/` so they never
//! interfere with the TUI. Initialization is best-effort and idempotent:
//! if the logger cannot start, the app runs without logging.

use std::path::PathBuf;
use std::sync::OnceLock;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

const LOG_FILE_BASENAME: &str = "termdeck";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

pub fn init() {
    if LOGGER.get().is_some() {
        return;
    }
    let Some(dir) = log_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(logger) = Logger::try_with_str(default_level()) else {
        return;
    };
    let started = logger
        .log_to_file(
            FileSpec::default()
                .directory(&dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .append()
        .start();
    if let Ok(handle) = started {
        let _ = LOGGER.set(handle);
    }
}

fn default_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn log_dir() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".local").join("state").join("termdeck"))
}
