//! Action reducer implementations
//!
//! Each reducer implements the `ActionReducer` trait and handles
//! one specific action kind. Reducers are PURE functions.

use enum_dispatch::enum_dispatch;

use shared::tables::TableAction;

use super::state::TablesStateModel;
use super::traits::{ActionReducer, Rejection};

mod add_table_choice;
mod cancel_reservation;
mod remove_table_choice;
mod reserve_table;
mod tables_loaded;

pub use add_table_choice::AddTableChoiceReducer;
pub use cancel_reservation::CancelReservationReducer;
pub use remove_table_choice::RemoveTableChoiceReducer;
pub use reserve_table::ReserveTableReducer;
pub use tables_loaded::TablesLoadedReducer;

/// ReducerAction enum - dispatches to concrete reducer implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(ActionReducer)]
#[derive(Debug, Clone)]
pub enum ReducerAction {
    TablesLoaded(TablesLoadedReducer),
    ReserveTable(ReserveTableReducer),
    CancelReservation(CancelReservationReducer),
    AddTableChoice(AddTableChoiceReducer),
    RemoveTableChoice(RemoveTableChoiceReducer),
}

impl ReducerAction {
    /// Reducer for a synchronous action
    ///
    /// This is the ONLY place with a match on TableAction. `LoadTables` has no
    /// synchronous reducer: the store fetches first and then applies
    /// [`TablesLoadedReducer`] with the result.
    pub fn for_action(action: &TableAction) -> Option<Self> {
        let reducer = match action {
            TableAction::LoadTables => return None,
            TableAction::ReserveTable { table_name } => {
                ReducerAction::ReserveTable(ReserveTableReducer {
                    table_name: table_name.clone(),
                })
            }
            TableAction::CancelReservation { table_name } => {
                ReducerAction::CancelReservation(CancelReservationReducer {
                    table_name: table_name.clone(),
                })
            }
            TableAction::AddTableChoice { table_name, choice } => {
                ReducerAction::AddTableChoice(AddTableChoiceReducer {
                    table_name: table_name.clone(),
                    choice: choice.clone(),
                })
            }
            TableAction::RemoveTableChoice { table_name, choice } => {
                ReducerAction::RemoveTableChoice(RemoveTableChoiceReducer {
                    table_name: table_name.clone(),
                    choice: choice.clone(),
                })
            }
        };
        Some(reducer)
    }
}
