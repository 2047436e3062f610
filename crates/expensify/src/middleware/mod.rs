use crate::actions::Action;
use crate::state::AppState;

pub mod logging_middleware;

pub use logging_middleware::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware runs inside `Store::dispatch` while the state lock is held, so
/// it must not dispatch back into the same store.
pub trait Middleware: Send {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current application state (read-only snapshot)
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(&mut self, action: &Action, state: &AppState) -> bool;
}
