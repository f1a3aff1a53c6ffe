//! File logging for the terminal client.
//!
//! The terminal belongs to the UI, so logs never go to stdout or stderr.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs a file-only tracing subscriber.
///
/// Each run logs to `<log_dir>/session_<unix time>/tracker.log`. The filter
/// comes from `RUST_LOG` with `info` as the floor.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = log_dir.map_or_else(default_log_dir, Path::to_path_buf);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let session_log_dir = log_dir.join(format!("session_{timestamp}"));
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "tracker.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // The writer must outlive every log call, i.e. the process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join("tracker.log");
    tracing::info!("Log file: {}", log_file.display());
    Ok(log_file)
}

/// Platform cache directory for logs.
///
/// - macOS: `~/Library/Caches/tracker/logs`
/// - Linux: `~/.cache/tracker/logs` (or `$XDG_CACHE_HOME/tracker/logs`)
/// - Windows: `%LOCALAPPDATA%\tracker\cache\logs`
/// - Fallback: `/tmp/tracker/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tracker")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tracker"))
        .join("logs")
}
