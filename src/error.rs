//! Error taxonomy for the todo API.
//!
//! # Design
//! `NotFound` gets a dedicated variant because it is the only error that maps
//! to 404; every validation failure is a 400. Each variant's display string
//! is the exact message clients receive, so the `IntoResponse` impl can build
//! the `{"error": ...}` body straight from `Display`. Errors are terminal per
//! request and never carry internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the todo service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// No record exists with the requested id.
    #[error("Todo not found")]
    NotFound,

    /// The write payload contains a key outside the client-mutable set.
    #[error("Unexpected fields in request")]
    UnexpectedFields,

    /// A create payload is missing `title`, or supplied it as null.
    #[error("Missing required fields")]
    MissingFields,

    /// An update payload tried to set `id`.
    #[error("ID cannot be changed")]
    ImmutableId,

    /// The `window` query parameter is not an integer.
    #[error("Invalid window parameter")]
    InvalidWindow,

    /// A field was supplied with a value of the wrong type or format.
    #[error("Invalid value for field `{0}`")]
    InvalidField(&'static str),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
