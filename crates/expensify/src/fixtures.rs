//! Shared test fixtures

use crate::domain_models::{Expense, ExpenseData};
use expense_db::{Database, DbPath, InMemoryDatabase};
use serde_json::{Map, Value};

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Three expenses spread around the epoch: gum today, rent four days
/// earlier, a credit card payment four days later
pub fn expenses() -> Vec<Expense> {
    vec![
        ExpenseData {
            description: "Gum".into(),
            note: String::new(),
            amount: 195,
            created_at: 0,
        }
        .with_id("1"),
        ExpenseData {
            description: "Rent".into(),
            note: String::new(),
            amount: 109500,
            created_at: -4 * DAY_MS,
        }
        .with_id("2"),
        ExpenseData {
            description: "Credit Card".into(),
            note: String::new(),
            amount: 4500,
            created_at: 4 * DAY_MS,
        }
        .with_id("3"),
    ]
}

/// Database whose `expenses` collection holds exactly the fixtures
pub async fn seeded_database() -> InMemoryDatabase {
    let db = InMemoryDatabase::new();
    let mut records = Map::new();
    for expense in expenses() {
        let data = serde_json::to_value(expense.data()).expect("fixture serializes");
        records.insert(expense.id, data);
    }

    db.set(&expenses_path(), Value::Object(records))
        .await
        .expect("seeding in-memory database");
    db
}

pub fn expenses_path() -> DbPath {
    DbPath::parse("expenses").expect("valid path")
}
