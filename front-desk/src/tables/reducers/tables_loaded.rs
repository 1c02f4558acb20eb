//! TablesLoaded reducer
//!
//! Applies a resolved directory fetch: the table list is replaced wholesale,
//! the orders map is carried over untouched.

use std::collections::HashSet;

use shared::models::Table;
use tracing::warn;

use crate::tables::state::TablesStateModel;
use crate::tables::traits::{ActionReducer, Rejection};

/// TablesLoaded reducer
#[derive(Debug, Clone)]
pub struct TablesLoadedReducer {
    pub tables: Vec<Table>,
}

impl ActionReducer for TablesLoadedReducer {
    fn reduce(&self, state: &TablesStateModel) -> Result<TablesStateModel, Rejection> {
        let mut seen = HashSet::with_capacity(self.tables.len());
        for table in &self.tables {
            if !seen.insert(table.name.as_str()) {
                return Err(Rejection::DuplicateTable {
                    table_name: table.name.clone(),
                });
            }
        }

        // Orders whose table vanished are kept; queries can list them.
        for table_name in state.orders().keys() {
            if !seen.contains(table_name.as_str()) {
                warn!(table_name = %table_name, "Reserved table missing from reloaded directory");
            }
        }

        Ok(state.with_tables(self.tables.clone()))
    }
}
