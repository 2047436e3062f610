//! Expense domain model
//!
//! `Expense` is the stored record plus its database key. `ExpenseData` is the
//! same record without the key, which is exactly what lives at
//! `expenses/{id}` remotely. `ExpenseUpdates` names the mutable fields a
//! partial update may touch; `id` is deliberately absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An expense as held in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    /// Key assigned by the database on create
    pub id: String,
    pub description: String,
    pub note: String,
    /// Smallest currency unit (cents)
    pub amount: i64,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

impl Expense {
    /// Attributes without the id
    pub fn data(&self) -> ExpenseData {
        ExpenseData {
            description: self.description.clone(),
            note: self.note.clone(),
            amount: self.amount,
            created_at: self.created_at,
        }
    }

    /// Apply a partial update; the id never changes
    pub fn apply(&mut self, updates: &ExpenseUpdates) {
        if let Some(description) = &updates.description {
            self.description = description.clone();
        }
        if let Some(note) = &updates.note {
            self.note = note.clone();
        }
        if let Some(amount) = updates.amount {
            self.amount = amount;
        }
        if let Some(created_at) = updates.created_at {
            self.created_at = created_at;
        }
    }
}

/// Expense attributes as stored remotely
///
/// Missing fields deserialize to their defaults, so partially written
/// records still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseData {
    pub description: String,
    pub note: String,
    pub amount: i64,
    pub created_at: i64,
}

impl ExpenseData {
    /// Attach the database key
    pub fn with_id(self, id: impl Into<String>) -> Expense {
        Expense {
            id: id.into(),
            description: self.description,
            note: self.note,
            amount: self.amount,
            created_at: self.created_at,
        }
    }
}

/// Partial set of mutable expense attributes
///
/// Unset fields are left out of the JSON form entirely, so an update only
/// ever names the fields it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpenseUpdates {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// Client-supplied attributes for a new expense, merged over the defaults
pub type ExpenseDraft = ExpenseUpdates;

impl ExpenseUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.note.is_none()
            && self.amount.is_none()
            && self.created_at.is_none()
    }

    /// Merge over `ExpenseData::default()`
    pub fn into_data(self) -> ExpenseData {
        let defaults = ExpenseData::default();
        ExpenseData {
            description: self.description.unwrap_or(defaults.description),
            note: self.note.unwrap_or(defaults.note),
            amount: self.amount.unwrap_or(defaults.amount),
            created_at: self.created_at.unwrap_or(defaults.created_at),
        }
    }

    /// The set fields keyed by their wire names
    pub fn to_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(fields) => Ok(fields),
            _ => Ok(Map::new()),
        }
    }
}

impl From<ExpenseData> for ExpenseUpdates {
    fn from(data: ExpenseData) -> Self {
        Self {
            description: Some(data.description),
            note: Some(data.note),
            amount: Some(data.amount),
            created_at: Some(data.created_at),
        }
    }
}

/// Anything that names an expense by id
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for Expense {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for str {
    fn id(&self) -> &str {
        self
    }
}

impl Identified for String {
    fn id(&self) -> &str {
        self
    }
}
