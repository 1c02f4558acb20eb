//! CancelReservation reducer

use crate::tables::state::TablesStateModel;
use crate::tables::traits::{ActionReducer, Rejection};

/// CancelReservation reducer
#[derive(Debug, Clone)]
pub struct CancelReservationReducer {
    pub table_name: String,
}

impl ActionReducer for CancelReservationReducer {
    fn reduce(&self, state: &TablesStateModel) -> Result<TablesStateModel, Rejection> {
        if state.order(&self.table_name).is_none() {
            return Err(Rejection::NotReserved {
                table_name: self.table_name.clone(),
            });
        }
        Ok(state.without_order(&self.table_name))
    }
}
