//! ReserveTable reducer
//!
//! Opens an empty order for a table. Reserving an already reserved table
//! replaces its order, discarding the previous choices.

use shared::tables::TableOrder;
use tracing::debug;

use crate::tables::state::TablesStateModel;
use crate::tables::traits::{ActionReducer, Rejection};

/// ReserveTable reducer
#[derive(Debug, Clone)]
pub struct ReserveTableReducer {
    pub table_name: String,
}

impl ActionReducer for ReserveTableReducer {
    fn reduce(&self, state: &TablesStateModel) -> Result<TablesStateModel, Rejection> {
        if !state.has_table(&self.table_name) {
            return Err(Rejection::UnknownTable {
                table_name: self.table_name.clone(),
            });
        }

        if let Some(previous) = state.order(&self.table_name) {
            debug!(
                table_name = %self.table_name,
                discarded_choices = previous.choices.len(),
                "Replacing existing order"
            );
        }

        Ok(state.with_order(TableOrder::new(self.table_name.clone())))
    }
}
