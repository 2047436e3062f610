//! Expenses Reducer
//!
//! Handles the expense list. Edit and remove for an unknown id leave the
//! list untouched.

use crate::actions::ExpenseAction;
use crate::domain_models::Expense;

/// Reduce the expense list
pub fn reduce(mut state: Vec<Expense>, action: &ExpenseAction) -> Vec<Expense> {
    match action {
        ExpenseAction::AddExpense { expense } => {
            state.push(expense.clone());
        }

        ExpenseAction::EditExpense { id, updates } => {
            match state.iter_mut().find(|expense| &expense.id == id) {
                Some(expense) => expense.apply(updates),
                None => log::debug!("Edit for unknown expense {}, ignoring", id),
            }
        }

        ExpenseAction::RemoveExpense { id } => {
            let before = state.len();
            state.retain(|expense| &expense.id != id);
            if state.len() == before {
                log::debug!("Remove for unknown expense {}, ignoring", id);
            }
        }

        ExpenseAction::SetExpenses { expenses } => {
            state = expenses.clone();
        }
    }
    state
}
