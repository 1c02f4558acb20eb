//! Line-oriented console front end
//!
//! One JSON [`TableAction`] per input line, one JSON [`ApiResponse`] per
//! output line.

use serde::Serialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::tables::{OrderViewModel, TableAction};
use tracing::debug;

use crate::tables::query::create_order_selector_for;
use crate::tables::{ActionOutcome, TablesStore};

/// Payload of a successful console response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConsoleReply {
    /// Order view of the table the action targeted
    Order(OrderViewModel),
    /// Directory reload result
    Loaded { tables: usize },
}

/// Parse, dispatch and render one input line
pub async fn handle_line(store: &TablesStore, line: &str) -> ApiResponse<ConsoleReply> {
    let action: TableAction = match serde_json::from_str(line) {
        Ok(action) => action,
        Err(e) => {
            debug!(error = %e, "Unparsable console input");
            return AppError::with_message(
                ErrorCode::InvalidFormat,
                format!("Invalid action: {}", e),
            )
            .into();
        }
    };

    let table_name = action.table_name().map(str::to_owned);
    match store.dispatch(action) {
        ActionOutcome::Pending(handle) => match handle.wait().await {
            Ok(tables) => ApiResponse::success(ConsoleReply::Loaded { tables }),
            Err(e) => AppError::from(e).into(),
        },
        ActionOutcome::Rejected(rejection) => AppError::from(&rejection).into(),
        ActionOutcome::Applied => {
            // Non-load actions always carry a table name
            let name = table_name.unwrap_or_default();
            let view = create_order_selector_for(name).select(&store.snapshot());
            ApiResponse::success(ConsoleReply::Order(view))
        }
    }
}
