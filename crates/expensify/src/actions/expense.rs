//! Expense actions and their creators
//!
//! Creators are pure: they wrap their arguments in an action and nothing
//! else. No validation happens here.

use serde::{Deserialize, Serialize};

use super::Action;
use crate::domain_models::{Expense, ExpenseUpdates, Identified};

pub const ADD_EXPENSE: &str = "ADD_EXPENSE";
pub const EDIT_EXPENSE: &str = "EDIT_EXPENSE";
pub const REMOVE_EXPENSE: &str = "REMOVE_EXPENSE";
pub const SET_EXPENSES: &str = "SET_EXPENSES";

/// Changes to the expense list
///
/// Serializes to `{ "type": "ADD_EXPENSE", "expense": {...} }` and friends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseAction {
    /// Append an expense
    AddExpense { expense: Expense },

    /// Merge `updates` into the expense with `id`
    EditExpense { id: String, updates: ExpenseUpdates },

    /// Drop the expense with `id`
    RemoveExpense { id: String },

    /// Replace the whole list
    SetExpenses { expenses: Vec<Expense> },
}

impl ExpenseAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            ExpenseAction::AddExpense { .. } => ADD_EXPENSE,
            ExpenseAction::EditExpense { .. } => EDIT_EXPENSE,
            ExpenseAction::RemoveExpense { .. } => REMOVE_EXPENSE,
            ExpenseAction::SetExpenses { .. } => SET_EXPENSES,
        }
    }
}

pub fn add_expense(expense: Expense) -> Action {
    Action::Expense(ExpenseAction::AddExpense { expense })
}

pub fn edit_expense(id: impl Into<String>, updates: ExpenseUpdates) -> Action {
    Action::Expense(ExpenseAction::EditExpense {
        id: id.into(),
        updates,
    })
}

/// Accepts a whole `Expense` as well as a bare id
pub fn remove_expense<T: Identified + ?Sized>(target: &T) -> Action {
    Action::Expense(ExpenseAction::RemoveExpense {
        id: target.id().to_string(),
    })
}

pub fn set_expenses(expenses: Vec<Expense>) -> Action {
    Action::Expense(ExpenseAction::SetExpenses { expenses })
}
