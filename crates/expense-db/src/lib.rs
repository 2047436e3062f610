//! Document database client for the expense tracker
//!
//! This crate provides a trait-based client for a hosted real-time document
//! database (Firebase Realtime Database style): a JSON tree addressed by
//! slash-separated paths. The application only ever talks to the `Database`
//! trait, so the backing implementation can be swapped freely.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 Database trait                   │
//! │  - push()    create with generated key           │
//! │  - set()     replace value at path               │
//! │  - update()  partial update at path              │
//! │  - remove()  delete at path                      │
//! │  - once()    one-time read                       │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ InMemoryDatabase│         │    RestDatabase     │
//! │ (tests, offline)│         │ (Firebase REST API) │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_db::{Database, DbPath, InMemoryDatabase};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), expense_db::DatabaseError> {
//! let db = InMemoryDatabase::new();
//! let expenses = DbPath::parse("expenses")?;
//!
//! let key = db.push(&expenses, json!({ "description": "Rent", "amount": 109500 })).await?;
//! let record = db.once(&expenses.child(&key)?).await?;
//! assert!(record.is_some());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod memory;
pub mod path;
pub mod rest;

pub use client::Database;
pub use error::DatabaseError;
pub use memory::InMemoryDatabase;
pub use path::DbPath;
pub use rest::{RestDatabase, RestDatabaseBuilder};
