//! Expensify - personal expense tracker
//!
//! Redux-style state container over a hosted JSON document database:
//!
//! ```text
//!   cli ──► commands ──► Store::dispatch_thunk(start_*)
//!                              │
//!                              ├──► Database (push / update / remove / once)
//!                              │
//!                              └──► Store::dispatch(Action)
//!                                        │
//!                                   middleware ──► reducer ──► AppState ──► listeners
//! ```

pub mod actions;
pub mod cli;
pub mod commands;
pub mod database;
pub mod dispatcher;
pub mod domain_models;
pub mod format;
pub mod logger;
pub mod middleware;
pub mod mock_store;
pub mod reducer;
pub mod reducers;
pub mod selectors;
pub mod state;
pub mod store;
pub mod thunks;

#[cfg(test)]
mod fixtures;
