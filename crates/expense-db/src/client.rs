//! Database client trait
//!
//! This module defines the core `Database` trait that all client
//! implementations must satisfy.

use crate::error::DatabaseError;
use crate::path::DbPath;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Document database client trait
///
/// Values are plain JSON. Writing `null` (or an empty object) to a node
/// deletes it, and reading a node that does not exist yields `None`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use expense_db::{Database, DbPath};
///
/// async fn count(db: &dyn Database) -> Result<usize, expense_db::DatabaseError> {
///     let value = db.once(&DbPath::parse("expenses")?).await?;
///     Ok(value.and_then(|v| v.as_object().map(|o| o.len())).unwrap_or(0))
/// }
/// ```
#[async_trait]
pub trait Database: Send + Sync {
    /// Create a child of `path` under a newly generated key
    ///
    /// Generated keys sort in creation order.
    ///
    /// # Returns
    ///
    /// The generated key.
    async fn push(&self, path: &DbPath, value: Value) -> Result<String, DatabaseError>;

    /// Replace the value at `path`
    async fn set(&self, path: &DbPath, value: Value) -> Result<(), DatabaseError>;

    /// Merge `fields` into the object at `path`
    ///
    /// Only the named children are written; siblings are left untouched.
    /// A `null` field deletes that child.
    async fn update(&self, path: &DbPath, fields: Map<String, Value>)
        -> Result<(), DatabaseError>;

    /// Delete the node at `path`. Deleting an absent node succeeds.
    async fn remove(&self, path: &DbPath) -> Result<(), DatabaseError>;

    /// Read the value at `path` once
    ///
    /// # Returns
    ///
    /// `None` when nothing is stored there.
    async fn once(&self, path: &DbPath) -> Result<Option<Value>, DatabaseError>;
}
