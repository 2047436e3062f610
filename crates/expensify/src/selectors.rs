//! Derived views of the state

use crate::domain_models::Expense;
use crate::state::{FiltersState, SortBy};
use std::cmp::Reverse;

/// Expenses matching `filters`, in the order the filters ask for
///
/// Date bounds are inclusive and text matching ignores case. Ties keep
/// their original order.
pub fn visible_expenses(expenses: &[Expense], filters: &FiltersState) -> Vec<Expense> {
    let text = filters.text.to_lowercase();

    let mut visible: Vec<Expense> = expenses
        .iter()
        .filter(|expense| {
            let after_start = filters
                .start_date
                .map_or(true, |start| expense.created_at >= start);
            let before_end = filters
                .end_date
                .map_or(true, |end| expense.created_at <= end);
            let text_match = expense.description.to_lowercase().contains(&text);
            after_start && before_end && text_match
        })
        .cloned()
        .collect();

    match filters.sort_by {
        SortBy::Date => visible.sort_by_key(|expense| Reverse(expense.created_at)),
        SortBy::Amount => visible.sort_by_key(|expense| Reverse(expense.amount)),
    }

    visible
}

/// Sum of all amounts, `None` when it does not fit in an `i64`
pub fn expenses_total(expenses: &[Expense]) -> Option<i64> {
    expenses
        .iter()
        .try_fold(0i64, |total, expense| total.checked_add(expense.amount))
}
