//! Recording store for tests
//!
//! `MockStore` runs thunks exactly like `Store` does, but never reduces:
//! every plain action is recorded and the state stays at its initial value.
//! Assertions are made against `actions()`.

use crate::actions::Action;
use crate::dispatcher::Dispatch;
use crate::state::AppState;
use crate::thunks::{Thunk, ThunkContext};
use expense_db::Database;
use std::sync::{Arc, Mutex, PoisonError};

struct MockStoreInner {
    state: AppState,
    actions: Mutex<Vec<Action>>,
    database: Arc<dyn Database>,
}

#[derive(Clone)]
pub struct MockStore {
    inner: Arc<MockStoreInner>,
}

impl MockStore {
    pub fn new(state: AppState, database: Arc<dyn Database>) -> Self {
        Self {
            inner: Arc::new(MockStoreInner {
                state,
                actions: Mutex::new(Vec::new()),
                database,
            }),
        }
    }

    /// Every plain action dispatched so far, oldest first
    pub fn actions(&self) -> Vec<Action> {
        self.inner
            .actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_actions(&self) {
        self.inner
            .actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub async fn dispatch_thunk(&self, thunk: Thunk) -> anyhow::Result<()> {
        let ctx = ThunkContext::new(Arc::new(self.clone()), Arc::clone(&self.inner.database));
        thunk.run(ctx).await
    }
}

impl Dispatch for MockStore {
    fn dispatch(&self, action: Action) {
        self.inner
            .actions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }

    fn state(&self) -> AppState {
        self.inner.state.clone()
    }
}
