//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by any
//! [`roster_core::store::EmployeeStore`]. CORS, tracing and transport concerns
//! are the caller's responsibility.
//!
//! # Routing
//!
//! `/employees/search` is a static route and `/employees/{id}` a capture. The
//! router matches static segments before captures regardless of registration
//! order, so `search` is never treated as an id.

pub mod employees;
pub mod error;
pub mod search;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::store::EmployeeStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested or merged into any parent router
/// regardless of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: EmployeeStore + 'static,
{
  Router::new()
    .route(
      "/employees",
      get(employees::list::<S>).post(employees::create::<S>),
    )
    .route("/employees/search", get(search::handler::<S>))
    .route(
      "/employees/{id}",
      get(employees::get_one::<S>)
        .put(employees::update_one::<S>)
        .delete(employees::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
