//! Read-side queries over the store state
//!
//! Queries never mutate state and never fail: a table without a reservation
//! projects to an empty order view.

use shared::models::Table;
use shared::tables::OrderViewModel;

use super::state::TablesStateModel;

/// Selector closed over one table name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSelector {
    table_name: String,
}

impl OrderSelector {
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Project the table's current order
    pub fn select(&self, state: &TablesStateModel) -> OrderViewModel {
        state
            .order(&self.table_name)
            .map(|order| OrderViewModel::from(order.as_ref()))
            .unwrap_or_else(|| OrderViewModel::empty(self.table_name.clone()))
    }
}

/// Build the order-view selector for a table
pub fn create_order_selector_for(table_name: impl Into<String>) -> OrderSelector {
    OrderSelector {
        table_name: table_name.into(),
    }
}

/// Names of tables with an active order, sorted
pub fn reserved_tables(state: &TablesStateModel) -> Vec<String> {
    state.orders().keys().cloned().collect()
}

/// Reserved tables that are missing from the current directory
pub fn orphaned_orders(state: &TablesStateModel) -> Vec<String> {
    state
        .orders()
        .keys()
        .filter(|name| !state.has_table(name))
        .cloned()
        .collect()
}

/// Directory entry for a table
pub fn find_table<'a>(state: &'a TablesStateModel, table_name: &str) -> Option<&'a Table> {
    state.tables().iter().find(|t| t.name == table_name)
}
