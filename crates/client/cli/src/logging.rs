//! File-only tracing setup; the TUI owns stdout and stderr.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use directories::ProjectDirs;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "pathgrid.log";

/// Installs the global subscriber writing to a per-session directory under
/// `log_dir` (or the platform cache dir). Returns the log file path.
pub fn init(log_dir: Option<&Path>) -> Result<PathBuf> {
    let session_id = format!(
        "session_{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    );

    let root = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    let session_log_dir = root.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = session_log_dir.join(LOG_FILE);
    tracing::info!(session = %session_id, file = %log_file.display(), "logging initialized");
    Ok(log_file)
}

fn default_log_dir() -> PathBuf {
    ProjectDirs::from("", "", "pathgrid")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("pathgrid").join("logs"))
}
