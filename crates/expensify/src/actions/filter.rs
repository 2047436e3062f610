//! Filter actions for the expense list.

use serde::{Deserialize, Serialize};

use super::Action;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterAction {
    /// Match descriptions containing `text`
    SetTextFilter { text: String },

    /// Newest expenses first
    SortByDate,

    /// Largest expenses first
    SortByAmount,

    /// Lower bound on `createdAt`, `None` clears it
    SetStartDate {
        #[serde(rename = "startDate")]
        start_date: Option<i64>,
    },

    /// Upper bound on `createdAt`, `None` clears it
    SetEndDate {
        #[serde(rename = "endDate")]
        end_date: Option<i64>,
    },
}

impl FilterAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            FilterAction::SetTextFilter { .. } => "SET_TEXT_FILTER",
            FilterAction::SortByDate => "SORT_BY_DATE",
            FilterAction::SortByAmount => "SORT_BY_AMOUNT",
            FilterAction::SetStartDate { .. } => "SET_START_DATE",
            FilterAction::SetEndDate { .. } => "SET_END_DATE",
        }
    }
}

pub fn set_text_filter(text: impl Into<String>) -> Action {
    Action::Filter(FilterAction::SetTextFilter { text: text.into() })
}

pub fn sort_by_date() -> Action {
    Action::Filter(FilterAction::SortByDate)
}

pub fn sort_by_amount() -> Action {
    Action::Filter(FilterAction::SortByAmount)
}

pub fn set_start_date(start_date: Option<i64>) -> Action {
    Action::Filter(FilterAction::SetStartDate { start_date })
}

pub fn set_end_date(end_date: Option<i64>) -> Action {
    Action::Filter(FilterAction::SetEndDate { end_date })
}
