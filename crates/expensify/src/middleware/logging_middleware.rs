use crate::actions::Action;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
#[derive(Debug, Default)]
pub struct LoggingMiddleware {
    dispatched: u64,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState) -> bool {
        self.dispatched += 1;
        log::debug!(
            "Action #{} {} ({} expenses in state)",
            self.dispatched,
            action.type_name(),
            state.expenses.len()
        );
        log::trace!("Action payload: {:?}", action);

        true // Always pass action through
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::sort_by_amount;

    #[test]
    fn test_passes_every_action_through() {
        let mut middleware = LoggingMiddleware::new();
        let state = AppState::default();

        assert!(middleware.handle(&sort_by_amount(), &state));
        assert!(middleware.handle(&sort_by_amount(), &state));
        assert_eq!(middleware.dispatched, 2);
    }
}
