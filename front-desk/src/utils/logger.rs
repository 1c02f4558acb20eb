//! Logging Infrastructure
//!
//! Structured logging to stderr, or to a daily rolling file when a log
//! directory is configured. `RUST_LOG` overrides the configured level.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Log file prefix inside the log directory
const LOG_FILE_PREFIX: &str = "front-desk";

/// Initialize the logger with defaults (info, stderr)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional level and log directory
///
/// Stdout is left alone so the console front end can write responses there.
/// A missing log directory falls back to stderr. If a subscriber is already
/// installed it is kept.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.map(Path::new).filter(|path| path.is_dir()) {
        let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
        let result = builder
            .with_ansi(false)
            .with_writer(file_appender)
            .try_init();
        if let Err(e) = result {
            tracing::debug!(error = %e, "Logger already initialized");
        }
        return;
    }

    if let Err(e) = builder.with_writer(std::io::stderr).try_init() {
        tracing::debug!(error = %e, "Logger already initialized");
    }
}
