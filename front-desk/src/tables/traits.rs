//! Reducer trait and the rejection taxonomy
//!
//! Reducers are PURE: they read the current model and either return the next
//! model or a [`Rejection`]. A rejection leaves the store unchanged.

use enum_dispatch::enum_dispatch;
use serde::Serialize;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use super::state::TablesStateModel;

/// Why an action was ignored
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    #[error("Table not found in directory: {table_name}")]
    UnknownTable { table_name: String },

    #[error("Table has no active order: {table_name}")]
    NoActiveOrder { table_name: String },

    #[error("Table is not reserved: {table_name}")]
    NotReserved { table_name: String },

    #[error("Choice {choice} is not in the order for table {table_name}")]
    ChoiceNotFound { table_name: String, choice: String },

    #[error("Table name appears more than once in directory: {table_name}")]
    DuplicateTable { table_name: String },
}

impl Rejection {
    pub fn table_name(&self) -> &str {
        match self {
            Rejection::UnknownTable { table_name }
            | Rejection::NoActiveOrder { table_name }
            | Rejection::NotReserved { table_name }
            | Rejection::ChoiceNotFound { table_name, .. }
            | Rejection::DuplicateTable { table_name } => table_name,
        }
    }

    pub fn error_code(&self) -> ErrorCode {
        match self {
            Rejection::UnknownTable { .. } => ErrorCode::TableNotFound,
            Rejection::NoActiveOrder { .. } => ErrorCode::OrderNotFound,
            Rejection::NotReserved { .. } => ErrorCode::TableAlreadyEmpty,
            Rejection::ChoiceNotFound { .. } => ErrorCode::OrderItemNotFound,
            Rejection::DuplicateTable { .. } => ErrorCode::TableNameDuplicated,
        }
    }
}

impl From<&Rejection> for AppError {
    fn from(rejection: &Rejection) -> Self {
        let err = AppError::with_message(rejection.error_code(), rejection.to_string())
            .with_detail("table_name", rejection.table_name());
        match rejection {
            Rejection::ChoiceNotFound { choice, .. } => err.with_detail("choice", choice.as_str()),
            _ => err,
        }
    }
}

/// Pure state transition for one action kind
#[enum_dispatch]
pub trait ActionReducer {
    /// Compute the next model, or reject without touching the current one
    fn reduce(&self, state: &TablesStateModel) -> Result<TablesStateModel, Rejection>;
}
