//! Error codes, structured errors and the response envelope
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::TableNotFound, "Table T9 not found")
//!     .with_detail("table_name", "T9");
//!
//! let response: ApiResponse<()> = err.into();
//! assert_eq!(response.code, Some(7001));
//! ```

mod codes;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError};
