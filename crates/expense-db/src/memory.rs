//! In-process database
//!
//! Keeps the whole JSON tree in memory behind an async mutex. Behaves like
//! the hosted database for everything the application relies on: generated
//! keys sort in creation order, `null` and empty objects delete nodes, and
//! object children iterate in key order.

use crate::client::Database;
use crate::error::DatabaseError;
use crate::path::DbPath;
use async_trait::async_trait;
use log::debug;
use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Database backed by an in-memory JSON tree
///
/// Cloning yields another handle to the same tree.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDatabase {
    root: Arc<Mutex<Value>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a database pre-populated with `root`
    pub fn with_root(root: Value) -> Self {
        Self {
            root: Arc::new(Mutex::new(normalize(root))),
        }
    }

    /// Copy of the entire tree
    pub async fn snapshot(&self) -> Value {
        self.root.lock().await.clone()
    }
}

#[async_trait]
impl Database for InMemoryDatabase {
    async fn push(&self, path: &DbPath, value: Value) -> Result<String, DatabaseError> {
        let key = Uuid::now_v7().simple().to_string();
        let child = path.child(&key)?;
        debug!("memory: push {}", child);

        let mut root = self.root.lock().await;
        write(&mut root, child.segments(), normalize(value));
        Ok(key)
    }

    async fn set(&self, path: &DbPath, value: Value) -> Result<(), DatabaseError> {
        debug!("memory: set {}", path);
        let mut root = self.root.lock().await;
        write(&mut root, path.segments(), normalize(value));
        Ok(())
    }

    async fn update(
        &self,
        path: &DbPath,
        fields: Map<String, Value>,
    ) -> Result<(), DatabaseError> {
        debug!("memory: update {} ({} fields)", path, fields.len());
        // Validate every key before touching the tree so a bad key writes nothing
        let children = fields
            .into_iter()
            .map(|(key, value)| path.child(&key).map(|child| (child, value)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut root = self.root.lock().await;
        for (child, value) in children {
            write(&mut root, child.segments(), normalize(value));
        }
        Ok(())
    }

    async fn remove(&self, path: &DbPath) -> Result<(), DatabaseError> {
        debug!("memory: remove {}", path);
        let mut root = self.root.lock().await;
        write(&mut root, path.segments(), Value::Null);
        Ok(())
    }

    async fn once(&self, path: &DbPath) -> Result<Option<Value>, DatabaseError> {
        debug!("memory: once {}", path);
        let root = self.root.lock().await;
        let mut node = &*root;
        for segment in path.segments() {
            match node.get(segment) {
                Some(child) => node = child,
                None => return Ok(None),
            }
        }
        Ok(Some(node.clone()))
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Drop null children and empty objects, recursively
fn normalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let map: Map<String, Value> = map
                .into_iter()
                .map(|(key, child)| (key, normalize(child)))
                .filter(|(_, child)| !is_empty(child))
                .collect();
            if map.is_empty() {
                Value::Null
            } else {
                Value::Object(map)
            }
        }
        other => other,
    }
}

/// Write `value` at `segments` below `node`, pruning parents left empty
fn write(node: &mut Value, segments: &[String], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        *node = value;
        return;
    };

    if !node.is_object() {
        if value.is_null() {
            return;
        }
        *node = Value::Object(Map::new());
    }

    if let Value::Object(map) = node {
        let child = map.entry(head.clone()).or_insert(Value::Null);
        write(child, rest, value);
        if is_empty(child) {
            map.remove(head);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn path(p: &str) -> DbPath {
        DbPath::parse(p).unwrap()
    }

    #[tokio::test]
    async fn test_push_then_once() {
        let db = InMemoryDatabase::new();
        let key = db
            .push(&path("expenses"), json!({ "description": "Gum", "amount": 195 }))
            .await
            .unwrap();

        assert!(!key.is_empty());
        let value = db.once(&path("expenses").child(&key).unwrap()).await.unwrap();
        assert_eq!(value, Some(json!({ "description": "Gum", "amount": 195 })));
    }

    #[tokio::test]
    async fn test_push_keys_sort_in_creation_order() {
        let db = InMemoryDatabase::new();
        let mut keys = Vec::new();
        for amount in 0..5 {
            keys.push(
                db.push(&path("expenses"), json!({ "amount": amount }))
                    .await
                    .unwrap(),
            );
        }

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn test_once_absent_is_none() {
        let db = InMemoryDatabase::new();
        assert_eq!(db.once(&path("expenses")).await.unwrap(), None);
        assert_eq!(db.once(&path("expenses/nope")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let db = InMemoryDatabase::with_root(json!({
            "expenses": { "1": { "description": "Gum", "note": "", "amount": 195, "createdAt": 0 } }
        }));

        let mut fields = Map::new();
        fields.insert("note".into(), json!("minty"));
        fields.insert("amount".into(), json!(250));
        db.update(&path("expenses/1"), fields).await.unwrap();

        assert_eq!(
            db.once(&path("expenses/1")).await.unwrap(),
            Some(json!({ "description": "Gum", "note": "minty", "amount": 250, "createdAt": 0 }))
        );
    }

    #[tokio::test]
    async fn test_update_rejects_bad_key_without_writing() {
        let db = InMemoryDatabase::with_root(json!({ "expenses": { "1": { "amount": 1 } } }));

        let mut fields = Map::new();
        fields.insert("amount".into(), json!(2));
        fields.insert("bad.key".into(), json!(3));
        assert!(db.update(&path("expenses/1"), fields).await.is_err());

        assert_eq!(
            db.once(&path("expenses/1")).await.unwrap(),
            Some(json!({ "amount": 1 }))
        );
    }

    #[tokio::test]
    async fn test_remove_prunes_empty_parents() {
        let db = InMemoryDatabase::with_root(json!({ "expenses": { "1": { "amount": 1 } } }));

        db.remove(&path("expenses/1")).await.unwrap();
        assert_eq!(db.once(&path("expenses")).await.unwrap(), None);
        assert_eq!(db.snapshot().await, json!({}));

        // removing again is fine
        db.remove(&path("expenses/1")).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_replaces_collection() {
        let db = InMemoryDatabase::with_root(json!({ "expenses": { "old": { "amount": 1 } } }));

        db.set(&path("expenses"), json!({ "a": { "amount": 2 }, "b": null }))
            .await
            .unwrap();

        assert_eq!(
            db.once(&path("expenses")).await.unwrap(),
            Some(json!({ "a": { "amount": 2 } }))
        );
    }

    #[tokio::test]
    async fn test_object_children_iterate_in_key_order() {
        let db = InMemoryDatabase::new();
        db.set(&path("expenses"), json!({ "3": 3, "1": 1, "2": 2 }))
            .await
            .unwrap();

        let value = db.once(&path("expenses")).await.unwrap().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["1", "2", "3"]);
    }
}
