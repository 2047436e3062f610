//! Expense thunks
//!
//! Each thunk performs exactly one database call against the `expenses`
//! collection and dispatches the matching plain action only after the call
//! succeeded. A failed call dispatches nothing and is handed back to the
//! caller of `dispatch_thunk`.

use anyhow::{bail, Context};
use expense_db::{DatabaseError, DbPath};
use serde_json::Value;

use super::Thunk;
use crate::actions::{add_expense, edit_expense, remove_expense, set_expenses};
use crate::domain_models::{Expense, ExpenseData, ExpenseDraft, ExpenseUpdates, Identified};

/// Collection holding one record per expense, keyed by id
pub const EXPENSES_REF: &str = "expenses";

fn expenses_ref() -> Result<DbPath, DatabaseError> {
    DbPath::parse(EXPENSES_REF)
}

/// Create an expense from `draft` merged over the defaults
pub fn start_add_expense(draft: ExpenseDraft) -> Thunk {
    Thunk::new("start_add_expense", move |ctx| async move {
        let data = draft.into_data();
        let record = serde_json::to_value(&data)?;

        let id = ctx
            .database()
            .push(&expenses_ref()?, record)
            .await
            .context("Failed to add expense")?;

        log::info!("Added expense {}", id);
        ctx.dispatch(add_expense(data.with_id(id)));
        Ok(())
    })
}

/// Write `updates` to `expenses/{id}`
pub fn start_edit_expense(id: impl Into<String>, updates: ExpenseUpdates) -> Thunk {
    let id = id.into();
    Thunk::new("start_edit_expense", move |ctx| async move {
        let path = expenses_ref()?.child(&id)?;
        let fields = updates.to_fields()?;

        ctx.database()
            .update(&path, fields)
            .await
            .with_context(|| format!("Failed to edit expense {}", id))?;

        log::info!("Edited expense {}", id);
        ctx.dispatch(edit_expense(id, updates));
        Ok(())
    })
}

/// Delete `expenses/{id}`
pub fn start_remove_expense<T: Identified + ?Sized>(target: &T) -> Thunk {
    let id = target.id().to_string();
    Thunk::new("start_remove_expense", move |ctx| async move {
        let path = expenses_ref()?.child(&id)?;

        ctx.database()
            .remove(&path)
            .await
            .with_context(|| format!("Failed to remove expense {}", id))?;

        log::info!("Removed expense {}", id);
        ctx.dispatch(remove_expense(id.as_str()));
        Ok(())
    })
}

/// Load the whole collection and replace the local list
pub fn start_set_expenses() -> Thunk {
    Thunk::new("start_set_expenses", |ctx| async move {
        let snapshot = ctx
            .database()
            .once(&expenses_ref()?)
            .await
            .context("Failed to fetch expenses")?;

        let expenses = expenses_from_snapshot(snapshot)?;
        log::info!("Fetched {} expenses", expenses.len());
        ctx.dispatch(set_expenses(expenses));
        Ok(())
    })
}

/// Turn the `{ id: record }` mapping into a list, keeping key order
fn expenses_from_snapshot(snapshot: Option<Value>) -> anyhow::Result<Vec<Expense>> {
    let records = match snapshot {
        None => return Ok(Vec::new()),
        Some(Value::Object(records)) => records,
        Some(other) => bail!("Expected an object of expenses, got {}", other),
    };

    records
        .into_iter()
        .map(|(id, record)| {
            let data: ExpenseData = serde_json::from_value(record)
                .with_context(|| format!("Malformed expense {}", id))?;
            Ok(data.with_id(id))
        })
        .collect()
}
