//! Table actions - typed commands applied to the table store

use serde::{Deserialize, Serialize};

/// Action kind, without payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableActionKind {
    LoadTables,
    ReserveTable,
    CancelReservation,
    AddTableChoice,
    RemoveTableChoice,
}

impl std::fmt::Display for TableActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableActionKind::LoadTables => write!(f, "LOAD_TABLES"),
            TableActionKind::ReserveTable => write!(f, "RESERVE_TABLE"),
            TableActionKind::CancelReservation => write!(f, "CANCEL_RESERVATION"),
            TableActionKind::AddTableChoice => write!(f, "ADD_TABLE_CHOICE"),
            TableActionKind::RemoveTableChoice => write!(f, "REMOVE_TABLE_CHOICE"),
        }
    }
}

/// Action payload variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableAction {
    /// Refresh the table directory from the directory source
    LoadTables,

    /// Open an empty order for a table, replacing any existing one
    ReserveTable { table_name: String },

    /// Drop the table's order and every choice in it
    CancelReservation { table_name: String },

    /// Append a choice to the end of the table's order
    AddTableChoice { table_name: String, choice: String },

    /// Remove the first occurrence of a choice from the table's order
    RemoveTableChoice { table_name: String, choice: String },
}

impl TableAction {
    pub fn reserve(table_name: impl Into<String>) -> Self {
        Self::ReserveTable {
            table_name: table_name.into(),
        }
    }

    pub fn cancel(table_name: impl Into<String>) -> Self {
        Self::CancelReservation {
            table_name: table_name.into(),
        }
    }

    pub fn add_choice(table_name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self::AddTableChoice {
            table_name: table_name.into(),
            choice: choice.into(),
        }
    }

    pub fn remove_choice(table_name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self::RemoveTableChoice {
            table_name: table_name.into(),
            choice: choice.into(),
        }
    }

    pub fn kind(&self) -> TableActionKind {
        match self {
            TableAction::LoadTables => TableActionKind::LoadTables,
            TableAction::ReserveTable { .. } => TableActionKind::ReserveTable,
            TableAction::CancelReservation { .. } => TableActionKind::CancelReservation,
            TableAction::AddTableChoice { .. } => TableActionKind::AddTableChoice,
            TableAction::RemoveTableChoice { .. } => TableActionKind::RemoveTableChoice,
        }
    }

    /// Table targeted by the action (`None` for directory loads)
    pub fn table_name(&self) -> Option<&str> {
        match self {
            TableAction::LoadTables => None,
            TableAction::ReserveTable { table_name }
            | TableAction::CancelReservation { table_name }
            | TableAction::AddTableChoice { table_name, .. }
            | TableAction::RemoveTableChoice { table_name, .. } => Some(table_name),
        }
    }
}
