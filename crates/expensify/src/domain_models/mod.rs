pub mod expense;

pub use expense::{Expense, ExpenseData, ExpenseDraft, ExpenseUpdates, Identified};
