//! Pre-persistence checks on raw write payloads.
//!
//! Pure functions over the decoded JSON object; no side effects. They run
//! before any typed field decoding so a payload with an unexpected key is
//! rejected even when the rest of it would decode fine.

use serde_json::{Map, Value};

use crate::error::ApiError;

/// The only fields a client may set on create or update.
pub const ALLOWED_FIELDS: [&str; 4] = ["title", "description", "completed", "deadline_at"];

/// Fails if the payload contains any key outside [`ALLOWED_FIELDS`].
pub fn check_field_set(payload: &Map<String, Value>) -> Result<(), ApiError> {
    if payload.keys().any(|k| !ALLOWED_FIELDS.contains(&k.as_str())) {
        return Err(ApiError::UnexpectedFields);
    }
    Ok(())
}

/// Fails unless `title` is present and non-null. Create only.
pub fn check_required(payload: &Map<String, Value>) -> Result<(), ApiError> {
    match payload.get("title") {
        Some(v) if !v.is_null() => Ok(()),
        _ => Err(ApiError::MissingFields),
    }
}

/// Fails if the payload tries to supply `id`. Update only.
pub fn check_immutable(payload: &Map<String, Value>) -> Result<(), ApiError> {
    if payload.contains_key("id") {
        return Err(ApiError::ImmutableId);
    }
    Ok(())
}
