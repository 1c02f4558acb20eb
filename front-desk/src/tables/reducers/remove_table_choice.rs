//! RemoveTableChoice reducer
//!
//! Removes the FIRST occurrence of the choice only; later duplicates stay.

use crate::tables::state::TablesStateModel;
use crate::tables::traits::{ActionReducer, Rejection};

/// RemoveTableChoice reducer
#[derive(Debug, Clone)]
pub struct RemoveTableChoiceReducer {
    pub table_name: String,
    pub choice: String,
}

impl ActionReducer for RemoveTableChoiceReducer {
    fn reduce(&self, state: &TablesStateModel) -> Result<TablesStateModel, Rejection> {
        let order = state
            .order(&self.table_name)
            .ok_or_else(|| Rejection::NoActiveOrder {
                table_name: self.table_name.clone(),
            })?;
        let next = order
            .without_first(&self.choice)
            .ok_or_else(|| Rejection::ChoiceNotFound {
                table_name: self.table_name.clone(),
                choice: self.choice.clone(),
            })?;
        Ok(state.with_order(next))
    }
}
