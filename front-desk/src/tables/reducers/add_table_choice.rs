//! AddTableChoice reducer

use crate::tables::state::TablesStateModel;
use crate::tables::traits::{ActionReducer, Rejection};

/// AddTableChoice reducer
#[derive(Debug, Clone)]
pub struct AddTableChoiceReducer {
    pub table_name: String,
    pub choice: String,
}

impl ActionReducer for AddTableChoiceReducer {
    fn reduce(&self, state: &TablesStateModel) -> Result<TablesStateModel, Rejection> {
        let order = state
            .order(&self.table_name)
            .ok_or_else(|| Rejection::NoActiveOrder {
                table_name: self.table_name.clone(),
            })?;
        Ok(state.with_order(order.with_choice(self.choice.clone())))
    }
}
