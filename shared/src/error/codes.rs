//! Numbered error codes
//!
//! Ranges: 0xxx request, 4xxx order, 7xxx table, 9xxx system.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    /// Input could not be parsed
    InvalidFormat = 6,

    /// No active order for the table
    OrderNotFound = 4001,
    /// Choice is not part of the order
    OrderItemNotFound = 4006,

    /// Table is not in the directory
    TableNotFound = 7001,
    /// Table has no reservation to cancel
    TableAlreadyEmpty = 7003,
    /// Directory lists the same table name twice
    TableNameDuplicated = 7005,

    InternalError = 9001,
    NetworkError = 9003,
    TimeoutError = 9004,
    /// Store created outside a runtime
    ConfigError = 9005,
    /// Table directory source cannot be reached or refused the request
    DirectoryUnavailable = 9006,
}

/// Every code, in ascending order
const ALL_CODES: [ErrorCode; 11] = [
    ErrorCode::InvalidFormat,
    ErrorCode::OrderNotFound,
    ErrorCode::OrderItemNotFound,
    ErrorCode::TableNotFound,
    ErrorCode::TableAlreadyEmpty,
    ErrorCode::TableNameDuplicated,
    ErrorCode::InternalError,
    ErrorCode::NetworkError,
    ErrorCode::TimeoutError,
    ErrorCode::ConfigError,
    ErrorCode::DirectoryUnavailable,
];

impl ErrorCode {
    /// Wire value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }
}

/// A wire value that names no known code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        ALL_CODES
            .into_iter()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}
