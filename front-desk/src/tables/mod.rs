//! Table reservation and order state
//!
//! This module keeps the table directory and the per-table orders:
//!
//! - **state**: immutable state model with copy-on-write helpers
//! - **reducers**: one pure reducer per action kind
//! - **store**: `TablesStore` for dispatch, subscriptions and selections
//! - **query**: order view projection and read helpers
//! - **directory**: where the table list comes from (HTTP, file, memory)
//!
//! # Architecture
//!
//! ```text
//! TableAction → TablesStore ─→ ReducerAction → next TablesStateModel
//!                   │                               ↓
//!                   │                         watch channel
//!                   │                               ↓
//!                   │                  Selection / state subscribers
//!                   ↓
//!            broadcast StoreEvent
//! ```
//!
//! # Load Flow
//!
//! 1. Store is created and dispatches `LoadTables`
//! 2. `TableDirectory` is queried in the background
//! 3. Other actions keep applying to the current state meanwhile
//! 4. The resolved list replaces the directory (orders untouched)
//! 5. `TablesLoaded` or `LoadFailed` is broadcast

pub mod directory;
pub mod error;
pub mod query;
pub mod state;
pub mod traits;
pub mod reducers;
pub mod store;

pub use directory::{
    HttpTableDirectory, JsonFileTableDirectory, StaticTableDirectory, TableDirectory,
};
pub use error::{DirectoryError, DirectoryResult, StoreError, StoreResult};
pub use query::{create_order_selector_for, OrderSelector};
pub use state::{OrdersMap, TablesStateModel};
pub use store::{ActionOutcome, LoadHandle, Selection, StoreEvent, TablesStore};
pub use traits::{ActionReducer, Rejection};
