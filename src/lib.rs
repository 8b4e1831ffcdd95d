//! Single-resource CRUD API for todo records.
//!
//! # Overview
//! Manages todo records (create, read, update, delete, list-with-filters)
//! over HTTP with JSON bodies, mounted under `/api/v1`. The service layer is
//! stateless per request; all state lives in the persistence gateway.
//!
//! # Design
//! - `routes` maps HTTP to service calls and owns no logic.
//! - `service` holds the decision logic: filter interpretation, validation
//!   order, payload decoding.
//! - `validate` is pure key-set checks over the raw JSON object.
//! - `store` is the persistence gateway: an in-memory map with atomic
//!   single-record operations and a predicate-list query.
//! - `error` is the single error taxonomy, mapped to status codes and
//!   `{"error": ...}` bodies in one place.
//!
//! `app()` builds the full router so integration tests can drive it
//! in-process with `tower::ServiceExt::oneshot`.

pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;
pub mod validate;

pub use error::ApiError;
pub use model::{NewTodo, Todo, TodoFilter, TodoPatch};
pub use store::MemoryStore;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Builds the application router with a fresh, empty store.
pub fn app() -> Router {
    let db: routes::Db = Arc::new(MemoryStore::new());
    Router::new()
        .nest("/api/v1", routes::router(db))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
