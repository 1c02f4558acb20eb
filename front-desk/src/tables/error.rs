//! Store and directory errors

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Table directory source errors
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Directory answered with a non-success status
    #[error("Directory returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Directory answered with an error envelope
    #[error("Directory error {code}: {message}")]
    Api { code: u16, message: String },

    /// Payload could not be interpreted as a table list
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Local directory file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DirectoryError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            DirectoryError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            DirectoryError::Http(_) => ErrorCode::NetworkError,
            DirectoryError::Status { .. } => ErrorCode::DirectoryUnavailable,
            // Known upstream codes pass through
            DirectoryError::Api { code, .. } => {
                ErrorCode::try_from(*code).unwrap_or(ErrorCode::DirectoryUnavailable)
            }
            DirectoryError::InvalidResponse(_) | DirectoryError::Serialization(_) => {
                ErrorCode::InvalidFormat
            }
            DirectoryError::Io(_) => ErrorCode::DirectoryUnavailable,
        }
    }
}

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Directory load failed: {0}")]
    Directory(#[from] DirectoryError),

    /// Fetched directory was rejected by the reducer (e.g. duplicate names)
    #[error("Directory rejected: {0}")]
    DirectoryRejected(String),

    /// Load dispatched at construction failed; replayed to every waiter
    #[error("Initial table load failed: {message}")]
    InitialLoadFailed { code: ErrorCode, message: String },

    #[error("Store requires a running Tokio runtime")]
    NoRuntime,

    #[error("Store has shut down")]
    Closed,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::Directory(e) => e.error_code(),
            StoreError::DirectoryRejected(_) => ErrorCode::TableNameDuplicated,
            StoreError::InitialLoadFailed { code, .. } => *code,
            StoreError::NoRuntime => ErrorCode::ConfigError,
            StoreError::Closed | StoreError::Internal(_) => ErrorCode::InternalError,
        };
        AppError::with_message(code, err.to_string())
    }
}
