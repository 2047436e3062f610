use crate::actions::FilterAction;
use crate::state::{FiltersState, SortBy};

/// Reduce filter state
pub fn reduce(mut state: FiltersState, action: &FilterAction) -> FiltersState {
    match action {
        FilterAction::SetTextFilter { text } => state.text = text.clone(),
        FilterAction::SortByDate => state.sort_by = SortBy::Date,
        FilterAction::SortByAmount => state.sort_by = SortBy::Amount,
        FilterAction::SetStartDate { start_date } => state.start_date = *start_date,
        FilterAction::SetEndDate { end_date } => state.end_date = *end_date,
    }
    state
}
