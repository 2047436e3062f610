//! Dispatch seam shared by the real and the mock store
//!
//! Thunks only ever see a `Dispatch` handle, so the same thunk runs against
//! `Store` in the application and against `MockStore` in tests.

use crate::actions::Action;
use crate::state::AppState;

pub trait Dispatch: Send + Sync {
    /// Send a plain action through the store
    fn dispatch(&self, action: Action);

    /// Snapshot of the current state
    fn state(&self) -> AppState;
}
