//! HTTP handlers: thin adapters from axum extractors to service calls.
//!
//! Write bodies are extracted as raw JSON objects because the validator needs
//! the provided key set before any typed decoding happens.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use crate::error::ApiError;
use crate::model::Todo;
use crate::service::{self, ListQuery};
use crate::store::MemoryStore;

pub type Db = Arc<MemoryStore>;

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(db)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn list_todos(
    State(db): State<Db>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    service::list(&db, query).await.map(Json)
}

async fn get_todo(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Todo>, ApiError> {
    service::get(&db, id).await.map(Json)
}

async fn create_todo(
    State(db): State<Db>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = service::create(&db, payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<Todo>, ApiError> {
    service::update(&db, id, payload).await.map(Json)
}

// Deleting a missing record is a success with an empty object body.
async fn delete_todo(State(db): State<Db>, Path(id): Path<i64>) -> Response {
    match service::delete(&db, id).await {
        Some(todo) => Json(todo).into_response(),
        None => Json(json!({})).into_response(),
    }
}
