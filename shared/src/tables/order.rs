//! Table orders and their read-side projection

use serde::{Deserialize, Serialize};

/// Ordered menu choices recorded for one reserved table
///
/// Choices are opaque menu identifiers. Duplicates are allowed; order matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOrder {
    pub table_name: String,
    pub choices: Vec<String>,
}

impl TableOrder {
    /// Empty order for a freshly reserved table
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            choices: Vec::new(),
        }
    }

    /// Copy of this order with `choice` appended
    pub fn with_choice(&self, choice: impl Into<String>) -> Self {
        let mut choices = Vec::with_capacity(self.choices.len() + 1);
        choices.extend(self.choices.iter().cloned());
        choices.push(choice.into());
        Self {
            table_name: self.table_name.clone(),
            choices,
        }
    }

    /// Copy of this order without the first occurrence of `choice`
    ///
    /// Returns `None` when the choice is not in the order.
    pub fn without_first(&self, choice: &str) -> Option<Self> {
        let index = self.choices.iter().position(|c| c == choice)?;
        let mut choices = self.choices.clone();
        choices.remove(index);
        Some(Self {
            table_name: self.table_name.clone(),
            choices,
        })
    }
}

/// Order projection for one table, as rendered by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderViewModel {
    pub table_name: String,
    pub choices: Vec<String>,
}

impl OrderViewModel {
    /// View of a table with no reservation
    pub fn empty(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            choices: Vec::new(),
        }
    }
}

impl From<&TableOrder> for OrderViewModel {
    fn from(order: &TableOrder) -> Self {
        Self {
            table_name: order.table_name.clone(),
            choices: order.choices.clone(),
        }
    }
}
