use crate::actions::Action;
use crate::dispatcher::Dispatch;
use crate::middleware::Middleware;
use crate::reducer::reduce;
use crate::state::AppState;
use crate::thunks::{Thunk, ThunkContext};
use expense_db::Database;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Handle returned by `Store::subscribe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct StoreInner {
    state: RwLock<AppState>,
    middleware: Mutex<Vec<Box<dyn Middleware>>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
    database: Arc<dyn Database>,
}

/// Store - holds application state and manages the Redux loop
///
/// Cloning yields another handle to the same store. Dispatches are
/// serialized: middleware and reducer run under the state lock, listeners
/// run after it is released.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

impl Store {
    pub fn new(initial_state: AppState, database: Arc<dyn Database>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(initial_state),
                middleware: Mutex::new(Vec::new()),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
                database,
            }),
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&self, middleware: M) {
        lock(&self.inner.middleware).push(Box::new(middleware));
    }

    /// Get a snapshot of the current state
    pub fn state(&self) -> AppState {
        self.inner
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Register a listener called with the new state after every reduced action
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AppState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        lock(&self.inner.listeners).push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = lock(&self.inner.listeners);
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&self, action: Action) {
        let new_state = {
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);

            let mut should_reduce = true;
            for middleware in lock(&self.inner.middleware).iter_mut() {
                if !middleware.handle(&action, &state) {
                    should_reduce = false;
                    break;
                }
            }

            if !should_reduce {
                log::debug!("Action {} consumed by middleware", action.type_name());
                return;
            }

            let current = std::mem::take(&mut *state);
            *state = reduce(current, &action);
            state.clone()
        };

        // Listeners may dispatch again, so call them without holding any lock
        let listeners: Vec<Listener> = lock(&self.inner.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&new_state);
        }
    }

    /// Run a thunk against this store
    ///
    /// Resolves once the thunk's database call finished and its follow-up
    /// action was reduced; a failed database call is returned unchanged.
    pub async fn dispatch_thunk(&self, thunk: Thunk) -> anyhow::Result<()> {
        let ctx = ThunkContext::new(Arc::new(self.clone()), Arc::clone(&self.inner.database));
        thunk.run(ctx).await
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        Store::dispatch(self, action);
    }

    fn state(&self) -> AppState {
        Store::state(self)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{remove_expense, set_expenses, sort_by_amount};
    use crate::fixtures;
    use crate::middleware::LoggingMiddleware;
    use crate::state::SortBy;
    use crate::thunks::start_set_expenses;
    use expense_db::InMemoryDatabase;
    use std::sync::atomic::AtomicUsize;

    fn store() -> Store {
        Store::new(AppState::default(), Arc::new(InMemoryDatabase::new()))
    }

    /// Consumes every REMOVE_EXPENSE
    struct BlockRemovals;

    impl Middleware for BlockRemovals {
        fn handle(&mut self, action: &Action, _state: &AppState) -> bool {
            action.type_name() != "REMOVE_EXPENSE"
        }
    }

    #[test]
    fn test_store_dispatch_reduces() {
        let store = store();
        store.dispatch(set_expenses(fixtures::expenses()));
        store.dispatch(sort_by_amount());

        let state = store.state();
        assert_eq!(state.expenses, fixtures::expenses());
        assert_eq!(state.filters.sort_by, SortBy::Amount);
    }

    #[test]
    fn test_set_expenses_is_idempotent() {
        let once = store();
        once.dispatch(set_expenses(fixtures::expenses()));

        let twice = store();
        twice.dispatch(set_expenses(fixtures::expenses()));
        twice.dispatch(set_expenses(fixtures::expenses()));

        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_middleware_can_consume_action() {
        let store = store();
        store.add_middleware(LoggingMiddleware::new());
        store.add_middleware(BlockRemovals);

        store.dispatch(set_expenses(fixtures::expenses()));
        store.dispatch(remove_expense("1"));

        assert_eq!(store.state().expenses.len(), 3);
    }

    #[test]
    fn test_subscribers_notified_until_unsubscribed() {
        let store = store();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |state| {
            assert_eq!(state.expenses.len(), 3);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.dispatch(set_expenses(fixtures::expenses()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));

        store.dispatch(set_expenses(fixtures::expenses()));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_listener_may_dispatch() {
        let store = store();
        let handle = store.clone();
        store.subscribe(move |state| {
            if state.filters.sort_by == SortBy::Date && !state.expenses.is_empty() {
                handle.dispatch(sort_by_amount());
            }
        });

        store.dispatch(set_expenses(fixtures::expenses()));
        assert_eq!(store.state().filters.sort_by, SortBy::Amount);
    }

    #[tokio::test]
    async fn test_dispatch_thunk_updates_state() {
        let db = fixtures::seeded_database().await;
        let store = Store::new(AppState::default(), Arc::new(db));

        store.dispatch_thunk(start_set_expenses()).await.unwrap();

        assert_eq!(store.state().expenses, fixtures::expenses());
    }
}
