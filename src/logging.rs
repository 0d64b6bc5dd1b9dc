//! File-backed tracing setup. The terminal belongs to the UI, so log
//! output goes to a file instead of stdout/stderr.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("pokegrid.log")
}

/// Install the global subscriber. `RUST_LOG` overrides [`DEFAULT_FILTER`].
pub fn init(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));
    // Already installed (tests, replays): keep the existing one.
    let _ = subscriber.try_init();
    Ok(())
}
