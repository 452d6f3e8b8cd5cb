//! File logging for TUI sessions.
//!
//! The TUI owns the terminal, so diagnostics go to a log file in the config
//! directory instead of stderr. The `SR_LOG` environment variable sets the
//! filter using tracing's EnvFilter syntax; when unset, info and above are
//! kept.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_FILTER_ENV: &str = "SR_LOG";

/// Log file name inside the config directory
const LOG_FILE: &str = "showrunner.log";

/// Install a file-backed tracing subscriber for this TUI session.
///
/// Returns the appender guard; dropping it flushes buffered log lines.
/// Returns None, and the session runs unlogged, when the config directory
/// is unavailable or a subscriber is already installed.
pub fn init() -> Option<WorkerGuard> {
    let dir = crate::config::config_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .json()
        .try_init();

    match installed {
        Ok(()) => Some(guard),
        Err(_) => None,
    }
}
