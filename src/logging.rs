//! Log file setup.
//!
//! Logs go to a daily-rotated file so they never draw over the TUI.
//! The filter comes from `GITMASTER_LOG` (EnvFilter syntax) and defaults
//! to `info`.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GITMASTER_LOG";

/// File name prefix of the rolling log.
const LOG_FILE_PREFIX: &str = "gitmaster.log";

/// Directory the log files are written to.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("gitmaster").join("logs"))
}

/// Build the filter from `GITMASTER_LOG`, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns the writer guard; keep it alive until exit so buffered lines
/// are flushed. Returns `None` when no log directory is usable, in which
/// case logging stays disabled.
pub fn init() -> Option<WorkerGuard> {
    let dir = log_dir()?;
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Warning: Could not create log directory {:?}: {}", dir, e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let installed = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .is_ok();

    installed.then_some(guard)
}
