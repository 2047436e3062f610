//! Actions module
//!
//! Actions are plain values describing a state transition. They are grouped
//! by the slice of state they affect and serialize to the familiar
//! `{ "type": "...", ...payload }` descriptor shape.

pub mod expense;
pub mod filter;

pub use expense::{add_expense, edit_expense, remove_expense, set_expenses, ExpenseAction};
pub use filter::{
    set_end_date, set_start_date, set_text_filter, sort_by_amount, sort_by_date, FilterAction,
};

use serde::{Deserialize, Serialize};

/// Root action enum - tagged by state slice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    Expense(ExpenseAction),
    Filter(FilterAction),
}

impl Action {
    /// The descriptor `type`, e.g. `ADD_EXPENSE`
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::Expense(action) => action.type_name(),
            Action::Filter(action) => action.type_name(),
        }
    }
}

impl From<ExpenseAction> for Action {
    fn from(action: ExpenseAction) -> Self {
        Action::Expense(action)
    }
}

impl From<FilterAction> for Action {
    fn from(action: FilterAction) -> Self {
        Action::Filter(action)
    }
}
