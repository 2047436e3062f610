//! Deferred, asynchronous actions
//!
//! A `Thunk` wraps one asynchronous side effect (a database call) followed
//! by zero or more plain dispatches. The store runs it with a
//! `ThunkContext` and hands the result back to whoever awaited the dispatch.
//!
//! ```text
//! command ─▶ start_* ─▶ Thunk ─▶ store.dispatch_thunk()
//!                                   │
//!                                   ├─ database call (await)
//!                                   └─ ctx.dispatch(plain action) ─▶ reducer
//! ```

pub mod expense_thunks;

pub use expense_thunks::{
    start_add_expense, start_edit_expense, start_remove_expense, start_set_expenses,
};

use crate::actions::Action;
use crate::dispatcher::Dispatch;
use crate::state::AppState;
use expense_db::Database;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// BoxFuture type alias for thunk bodies
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type ThunkFn = Box<dyn FnOnce(ThunkContext) -> BoxFuture<'static, anyhow::Result<()>> + Send>;

/// What a running thunk can reach: dispatch, state and the database
#[derive(Clone)]
pub struct ThunkContext {
    dispatcher: Arc<dyn Dispatch>,
    database: Arc<dyn Database>,
}

impl ThunkContext {
    pub fn new(dispatcher: Arc<dyn Dispatch>, database: Arc<dyn Database>) -> Self {
        Self {
            dispatcher,
            database,
        }
    }

    pub fn dispatch(&self, action: Action) {
        self.dispatcher.dispatch(action);
    }

    pub fn get_state(&self) -> AppState {
        self.dispatcher.state()
    }

    pub fn database(&self) -> &dyn Database {
        self.database.as_ref()
    }
}

/// A deferred computation run by the store
pub struct Thunk {
    name: &'static str,
    body: ThunkFn,
}

impl Thunk {
    pub fn new<F, Fut>(name: &'static str, body: F) -> Self
    where
        F: FnOnce(ThunkContext) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Self {
            name,
            body: Box::new(move |ctx| Box::pin(body(ctx))),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the thunk to completion
    pub async fn run(self, ctx: ThunkContext) -> anyhow::Result<()> {
        log::debug!("Thunk {} started", self.name);
        let result = (self.body)(ctx).await;
        match &result {
            Ok(()) => log::debug!("Thunk {} finished", self.name),
            Err(e) => log::warn!("Thunk {} failed: {:#}", self.name, e),
        }
        result
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thunk").field("name", &self.name).finish()
    }
}
