//! Command execution
//!
//! Every command first loads the collection through `start_set_expenses`,
//! then works against the store the same way a page of the app would.

use anyhow::{bail, Context, Result};
use expensify_config::AppConfig;

use crate::actions::{
    set_end_date, set_start_date, set_text_filter, sort_by_amount, sort_by_date,
};
use crate::cli::{Command, USAGE};
use crate::domain_models::Expense;
use crate::format::{format_amount, format_date};
use crate::selectors::{expenses_total, visible_expenses};
use crate::state::{FiltersState, SortBy};
use crate::store::Store;
use crate::thunks::{
    start_add_expense, start_edit_expense, start_remove_expense, start_set_expenses,
};

/// Run `command` and return what should be printed
pub async fn run(command: Command, store: &Store, config: &AppConfig) -> Result<String> {
    if command == Command::Help {
        return Ok(USAGE.to_string());
    }

    store.dispatch_thunk(start_set_expenses()).await?;
    let symbol = config.currency_symbol.as_str();

    match command {
        Command::List(filters) => {
            apply_filters(store, filters);
            let state = store.state();
            let visible = visible_expenses(&state.expenses, &state.filters);
            render_list(&visible, symbol)
        }
        Command::Add(draft) => {
            store.dispatch_thunk(start_add_expense(draft)).await?;
            match store.state().expenses.last() {
                Some(expense) => Ok(format!("Added {}", render_expense(expense, symbol))),
                None => bail!("Expense was stored but is missing from the list"),
            }
        }
        Command::Edit { id, updates } => {
            if updates.is_empty() {
                bail!("Nothing to change for expense {}", id);
            }
            find_expense(store, &id)?;
            store
                .dispatch_thunk(start_edit_expense(id.as_str(), updates))
                .await?;
            let expense = find_expense(store, &id)?;
            Ok(format!("Updated {}", render_expense(&expense, symbol)))
        }
        Command::Remove { id } => {
            let expense = find_expense(store, &id)?;
            store.dispatch_thunk(start_remove_expense(&expense)).await?;
            Ok(format!("Removed {}", render_expense(&expense, symbol)))
        }
        Command::Total => {
            let state = store.state();
            summary(&state.expenses, symbol)
        }
        Command::Help => Ok(USAGE.to_string()),
    }
}

fn apply_filters(store: &Store, filters: FiltersState) {
    store.dispatch(set_text_filter(filters.text));
    store.dispatch(match filters.sort_by {
        SortBy::Date => sort_by_date(),
        SortBy::Amount => sort_by_amount(),
    });
    store.dispatch(set_start_date(filters.start_date));
    store.dispatch(set_end_date(filters.end_date));
}

fn find_expense(store: &Store, id: &str) -> Result<Expense> {
    match store.state().expenses.into_iter().find(|e| e.id == id) {
        Some(expense) => Ok(expense),
        None => bail!("No expense with id '{}'", id),
    }
}

fn summary(expenses: &[Expense], symbol: &str) -> Result<String> {
    let noun = if expenses.len() == 1 { "expense" } else { "expenses" };
    let total = expenses_total(expenses)
        .with_context(|| format!("Total of {} {} is too large to show", expenses.len(), noun))?;
    Ok(format!(
        "Viewing {} {} totalling {}",
        expenses.len(),
        noun,
        format_amount(total, symbol)
    ))
}

fn render_expense(expense: &Expense, symbol: &str) -> String {
    let mut line = format!(
        "{}  {}  {}  {}",
        expense.id,
        expense.description,
        format_amount(expense.amount, symbol),
        format_date(expense.created_at)
    );
    if !expense.note.is_empty() {
        line.push_str(&format!("  ({})", expense.note));
    }
    line
}

fn render_list(expenses: &[Expense], symbol: &str) -> Result<String> {
    let mut out = summary(expenses, symbol)?;
    if expenses.is_empty() {
        out.push_str("\nNo expenses");
        return Ok(out);
    }
    for expense in expenses {
        out.push('\n');
        out.push_str(&render_expense(expense, symbol));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{ExpenseDraft, ExpenseUpdates};
    use crate::fixtures;
    use crate::state::AppState;
    use expense_db::{Database, InMemoryDatabase};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    async fn seeded() -> (Store, InMemoryDatabase) {
        let db = fixtures::seeded_database().await;
        let store = Store::new(AppState::default(), Arc::new(db.clone()));
        (store, db)
    }

    #[tokio::test]
    async fn test_list_sorted_by_date() {
        let (store, _db) = seeded().await;

        let out = run(
            Command::List(FiltersState::default()),
            &store,
            &AppConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(
            out,
            "Viewing 3 expenses totalling $1,141.95\n\
             3  Credit Card  $45.00  Jan 5, 1970\n\
             1  Gum  $1.95  Jan 1, 1970\n\
             2  Rent  $1,095.00  Dec 28, 1969"
        );
    }

    #[tokio::test]
    async fn test_list_with_text_filter() {
        let (store, _db) = seeded().await;
        let filters = FiltersState {
            text: "RENT".into(),
            ..Default::default()
        };

        let out = run(Command::List(filters), &store, &AppConfig::default())
            .await
            .unwrap();

        assert_eq!(
            out,
            "Viewing 1 expense totalling $1,095.00\n2  Rent  $1,095.00  Dec 28, 1969"
        );
        assert_eq!(store.state().filters.text, "RENT");
    }

    #[tokio::test]
    async fn test_list_empty_database() {
        let store = Store::new(AppState::default(), Arc::new(InMemoryDatabase::new()));

        let out = run(
            Command::List(FiltersState::default()),
            &store,
            &AppConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(out, "Viewing 0 expenses totalling $0.00\nNo expenses");
    }

    #[tokio::test]
    async fn test_add_persists_and_reports() {
        let store = Store::new(AppState::default(), Arc::new(InMemoryDatabase::new()));
        let draft = ExpenseDraft::new().description("Mouse").amount(3000);

        let out = run(Command::Add(draft), &store, &AppConfig::default())
            .await
            .unwrap();

        let expenses = store.state().expenses;
        assert_eq!(expenses.len(), 1);
        assert!(out.starts_with(&format!("Added {}  Mouse  $30.00", expenses[0].id)));
    }

    #[tokio::test]
    async fn test_edit_updates_database() {
        let (store, db) = seeded().await;

        let out = run(
            Command::Edit {
                id: "1".into(),
                updates: ExpenseUpdates::new().note("minty"),
            },
            &store,
            &AppConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(out, "Updated 1  Gum  $1.95  Jan 1, 1970  (minty)");
        let record = db
            .once(&fixtures::expenses_path().child("1").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(record["note"], "minty");
    }

    #[tokio::test]
    async fn test_edit_and_remove_unknown_id_fail() {
        let (store, db) = seeded().await;
        let config = AppConfig::default();

        let edit = Command::Edit {
            id: "nope".into(),
            updates: ExpenseUpdates::new().amount(1),
        };
        assert!(run(edit, &store, &config).await.is_err());
        assert!(run(Command::Remove { id: "nope".into() }, &store, &config)
            .await
            .is_err());

        let snapshot = db.snapshot().await;
        assert_eq!(snapshot["expenses"].as_object().unwrap().len(), 3);
        assert!(snapshot["expenses"].get("nope").is_none());
    }

    #[tokio::test]
    async fn test_edit_without_changes_fails() {
        let (store, _db) = seeded().await;
        let edit = Command::Edit {
            id: "1".into(),
            updates: ExpenseUpdates::new(),
        };
        assert!(run(edit, &store, &AppConfig::default()).await.is_err());
    }

    #[tokio::test]
    async fn test_remove_then_total() {
        let (store, db) = seeded().await;
        let config = AppConfig::default();

        let out = run(Command::Remove { id: "2".into() }, &store, &config)
            .await
            .unwrap();
        assert_eq!(out, "Removed 2  Rent  $1,095.00  Dec 28, 1969");

        let total = run(Command::Total, &store, &config).await.unwrap();
        assert_eq!(total, "Viewing 2 expenses totalling $46.95");
        assert_eq!(
            db.snapshot().await["expenses"].as_object().unwrap().len(),
            2
        );
    }

    #[tokio::test]
    async fn test_oversized_total_is_an_error() {
        let store = Store::new(AppState::default(), Arc::new(InMemoryDatabase::new()));
        let config = AppConfig::default();
        let huge = crate::format::parse_amount("90000000000000000").unwrap();

        for description in ["Yacht", "Island"] {
            let draft = ExpenseDraft::new().description(description).amount(huge);
            run(Command::Add(draft), &store, &config).await.unwrap();
        }

        let err = run(Command::Total, &store, &config).await.unwrap_err();
        assert!(err.to_string().contains("too large"));

        let err = run(Command::List(FiltersState::default()), &store, &config)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[tokio::test]
    async fn test_help_skips_database() {
        let store = Store::new(AppState::default(), Arc::new(InMemoryDatabase::new()));
        let out = run(Command::Help, &store, &AppConfig::default())
            .await
            .unwrap();
        assert_eq!(out, USAGE);
        assert!(store.state().expenses.is_empty());
    }
}
