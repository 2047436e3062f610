use crate::actions::Action;
use crate::reducers::{expenses_reducer, filters_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that hands each action to the slice it targets
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Expense(action) => {
            state.expenses = expenses_reducer::reduce(state.expenses, action);
        }
        Action::Filter(action) => {
            state.filters = filters_reducer::reduce(state.filters, action);
        }
    }

    state
}
