//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to a file in the
//! platform cache directory. `RUST_LOG` controls the filter (default `info`).

use crate::core::constants::{APP_NAME, LOG_FILE_NAME};
use directories::ProjectDirs;
use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// `flappy.log` under the platform cache directory.
pub fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.cache_dir().join(LOG_FILE_NAME))
}

/// Route the `log` facade to `path`, truncating any previous log.
pub fn init_file_logger(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}

/// Best-effort logger setup. Returns the log path when logging is active;
/// an unusable location just leaves logging off.
pub fn init() -> Option<PathBuf> {
    let path = default_log_path()?;
    init_file_logger(&path).ok()?;
    Some(path)
}
