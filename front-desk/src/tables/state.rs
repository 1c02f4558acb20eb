//! Canonical store state
//!
//! `TablesStateModel` is never mutated in place. Every transition builds a
//! new model from the previous one; untouched parts are shared through `Arc`
//! so subscribers can detect change by pointer comparison.

use std::collections::BTreeMap;
use std::sync::Arc;

use shared::models::Table;
use shared::tables::TableOrder;

/// Active orders keyed by table name (a missing key means "not reserved")
pub type OrdersMap = BTreeMap<String, Arc<TableOrder>>;

/// Table directory plus the orders of reserved tables
#[derive(Debug, Clone, Default)]
pub struct TablesStateModel {
    tables: Arc<Vec<Table>>,
    orders: Arc<OrdersMap>,
}

impl TablesStateModel {
    pub fn new(tables: Vec<Table>, orders: OrdersMap) -> Self {
        Self {
            tables: Arc::new(tables),
            orders: Arc::new(orders),
        }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn orders(&self) -> &OrdersMap {
        &self.orders
    }

    /// Shared handle to the directory (pointer-stable across order actions)
    pub fn tables_handle(&self) -> &Arc<Vec<Table>> {
        &self.tables
    }

    /// Shared handle to the orders map (pointer-stable across directory loads)
    pub fn orders_handle(&self) -> &Arc<OrdersMap> {
        &self.orders
    }

    pub fn order(&self, table_name: &str) -> Option<&Arc<TableOrder>> {
        self.orders.get(table_name)
    }

    pub fn has_table(&self, table_name: &str) -> bool {
        self.tables.iter().any(|t| t.name == table_name)
    }

    /// Next state with the directory replaced and orders untouched
    pub fn with_tables(&self, tables: Vec<Table>) -> Self {
        Self {
            tables: Arc::new(tables),
            orders: Arc::clone(&self.orders),
        }
    }

    /// Next state with one order set; other entries are shared with `self`
    pub fn with_order(&self, order: TableOrder) -> Self {
        let mut orders = OrdersMap::clone(&self.orders);
        orders.insert(order.table_name.clone(), Arc::new(order));
        Self {
            tables: Arc::clone(&self.tables),
            orders: Arc::new(orders),
        }
    }

    /// Next state with one order removed; other entries are shared with `self`
    pub fn without_order(&self, table_name: &str) -> Self {
        let mut orders = OrdersMap::clone(&self.orders);
        orders.remove(table_name);
        Self {
            tables: Arc::clone(&self.tables),
            orders: Arc::new(orders),
        }
    }
}

/// Structural equality (pointer identity is not required)
impl PartialEq for TablesStateModel {
    fn eq(&self, other: &Self) -> bool {
        self.tables == other.tables && self.orders == other.orders
    }
}

impl Eq for TablesStateModel {}
