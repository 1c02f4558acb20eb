//! Shared types for the front desk
//!
//! Domain and wire types used by the table store and by any presentation
//! layer that drives it: table directory records, table actions, order
//! view-models, and the unified error system.

pub mod error;
pub mod models;
pub mod tables;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, ErrorCode};
pub use models::Table;
pub use tables::{OrderViewModel, TableAction, TableActionKind, TableOrder};
