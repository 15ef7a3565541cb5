//! Tracing subscriber setup.
//!
//! The interactive UI owns the terminal, so it logs to a file. Headless
//! replay logs to stderr and keeps stdout for the resulting snapshot.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// `~/.cache/tally/tally.log` or the platform equivalent.
pub fn default_log_file() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("tally").join("tally.log")
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init_tracing(level: &str, target: &LogTarget) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(UtcTime::rfc_3339());

    match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_writer(Mutex::new(file)).with_ansi(false).init();
        }
    }

    Ok(())
}
