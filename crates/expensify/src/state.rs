use crate::domain_models::Expense;
use serde::{Deserialize, Serialize};

/// Application state - the single source of truth
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Local projection of the remote `expenses` collection
    pub expenses: Vec<Expense>,
    pub filters: FiltersState,
}

/// Ordering applied by the visible-expenses selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Newest first
    #[default]
    Date,
    /// Largest first
    Amount,
}

/// Expense list filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiltersState {
    /// Case-insensitive description match
    pub text: String,
    pub sort_by: SortBy,
    /// Inclusive lower bound on `createdAt`
    pub start_date: Option<i64>,
    /// Inclusive upper bound on `createdAt`
    pub end_date: Option<i64>,
}
