//! Front desk configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | TABLES_API_URL | http://localhost:3000 | Table directory base URL |
//! | TABLES_API_PATH | api/tables | Table directory path |
//! | TABLES_FILE | (unset) | Load tables from this JSON file instead of HTTP |
//! | REQUEST_TIMEOUT_MS | 30000 | Directory request timeout (ms) |
//! | EVENT_CHANNEL_CAPACITY | 1024 | Store event channel capacity |
//! | LOG_LEVEL | info | Default log filter |
//! | LOG_DIR | (unset) | Daily rolling log directory |
//! | ENVIRONMENT | development | Runtime environment |
//!
//! # Example
//!
//! ```ignore
//! TABLES_FILE=./tables.json LOG_LEVEL=debug cargo run -p front-desk
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::tables::store::EVENT_CHANNEL_CAPACITY;

#[derive(Debug, Clone)]
pub struct Config {
    /// Table directory base URL
    pub tables_api_url: String,
    /// Table directory path, joined to the base URL
    pub tables_api_path: String,
    /// Local JSON table list; takes precedence over HTTP
    pub tables_file: Option<PathBuf>,
    /// Directory request timeout (ms)
    pub request_timeout_ms: u64,
    pub event_channel_capacity: usize,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            tables_api_url: non_empty("TABLES_API_URL")
                .unwrap_or_else(|| "http://localhost:3000".into()),
            tables_api_path: non_empty("TABLES_API_PATH").unwrap_or_else(|| "api/tables".into()),
            tables_file: non_empty("TABLES_FILE").map(PathBuf::from),
            request_timeout_ms: non_empty("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(30000),
            event_channel_capacity: non_empty("EVENT_CHANNEL_CAPACITY")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|capacity| *capacity > 0)
                .unwrap_or(EVENT_CHANNEL_CAPACITY),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
