//! Todo service: orchestrates validation, filter interpretation, and store
//! calls for each operation.
//!
//! # Design
//! Each operation is a single stateless pass against the store; no state is
//! held between calls. Query parameters and write payloads arrive raw (query
//! strings, `serde_json::Map`) because their interpretation is part of the
//! contract here: the `completed` filter maps the string `"true"`
//! case-insensitively to true and anything else to false, and write payloads
//! must have their key set checked before typed decoding.

use chrono::{Duration, NaiveDateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::model::{NewTodo, Todo, TodoFilter, TodoPatch};
use crate::store::MemoryStore;
use crate::validate;

/// Raw list query parameters as extracted from the URL.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub completed: Option<String>,
    pub window: Option<String>,
}

/// Lists records matching the optional `completed` and `window` filters.
/// Returns the full matching set; there is no pagination.
pub async fn list(store: &MemoryStore, query: ListQuery) -> Result<Vec<Todo>, ApiError> {
    let filter = TodoFilter {
        completed: query.completed.map(|v| v.eq_ignore_ascii_case("true")),
        due_within: query.window.map(parse_window).transpose()?,
    };
    Ok(store.list(&filter).await)
}

pub async fn get(store: &MemoryStore, id: i64) -> Result<Todo, ApiError> {
    store.get(id).await.ok_or(ApiError::NotFound)
}

/// Validates and persists a create payload, returning the stored record.
pub async fn create(store: &MemoryStore, payload: Map<String, Value>) -> Result<Todo, ApiError> {
    validate::check_field_set(&payload)?;
    validate::check_required(&payload)?;

    let new = NewTodo {
        // check_required guarantees the key is present and non-null
        title: decode_title(&payload["title"])?,
        description: match payload.get("description") {
            Some(v) => decode_nullable_string(v, "description")?,
            None => None,
        },
        completed: match payload.get("completed") {
            None | Some(Value::Null) => false,
            Some(v) => decode_completed(v)?,
        },
        deadline_at: match payload.get("deadline_at") {
            Some(v) => decode_deadline(v)?,
            None => None,
        },
    };
    Ok(store.insert(new).await)
}

/// Validates an update payload and merges it into the record. Fields absent
/// from the payload keep their stored value.
pub async fn update(
    store: &MemoryStore,
    id: i64,
    payload: Map<String, Value>,
) -> Result<Todo, ApiError> {
    if store.get(id).await.is_none() {
        return Err(ApiError::NotFound);
    }
    validate::check_immutable(&payload)?;
    validate::check_field_set(&payload)?;

    let patch = TodoPatch {
        // title is non-nullable, so a null here is a type error, not a clear
        title: match payload.get("title") {
            Some(v) => Some(decode_title(v)?),
            None => None,
        },
        description: match payload.get("description") {
            Some(v) => Some(decode_nullable_string(v, "description")?),
            None => None,
        },
        completed: match payload.get("completed") {
            Some(v) => Some(decode_completed(v)?),
            None => None,
        },
        deadline_at: match payload.get("deadline_at") {
            Some(v) => Some(decode_deadline(v)?),
            None => None,
        },
    };

    // The record can vanish between the existence check and the merge;
    // surfacing that as NotFound keeps the race harmless.
    store.update(id, patch).await.ok_or(ApiError::NotFound)
}

/// Removes the record with this id. A missing id is a success with no value,
/// so deletion is idempotent.
pub async fn delete(store: &MemoryStore, id: i64) -> Option<Todo> {
    store.remove(id).await
}

fn parse_window(raw: String) -> Result<NaiveDateTime, ApiError> {
    let days: i64 = raw.trim().parse().map_err(|_| ApiError::InvalidWindow)?;
    let span = Duration::try_days(days).ok_or(ApiError::InvalidWindow)?;
    Utc::now()
        .naive_utc()
        .checked_add_signed(span)
        .ok_or(ApiError::InvalidWindow)
}

fn decode_title(value: &Value) -> Result<String, ApiError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or(ApiError::InvalidField("title"))
}

fn decode_nullable_string(value: &Value, field: &'static str) -> Result<Option<String>, ApiError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(ApiError::InvalidField(field)),
    }
}

fn decode_completed(value: &Value) -> Result<bool, ApiError> {
    value.as_bool().ok_or(ApiError::InvalidField("completed"))
}

fn decode_deadline(value: &Value) -> Result<Option<NaiveDateTime>, ApiError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ApiError::InvalidField("deadline_at")),
        _ => Err(ApiError::InvalidField("deadline_at")),
    }
}
