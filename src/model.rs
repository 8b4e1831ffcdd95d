//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the persisted record. `NewTodo` and `TodoPatch` are the write
//! payloads produced by the service after validation, so they carry typed
//! fields rather than raw JSON. The nullable fields of `TodoPatch` are
//! double-optional: the outer `Option` is key presence, the inner one is a
//! JSON null. An explicit null overwrites the stored value while an absent
//! key preserves it, and collapsing the two would lose that distinction.
//!
//! Timestamps are `NaiveDateTime` so they serialize as offset-free ISO-8601
//! strings (`"2023-02-27T00:00:00"`), the wire format clients expect.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single persisted todo record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub deadline_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A validated create payload. The store assigns `id` and both timestamps.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub deadline_at: Option<NaiveDateTime>,
}

/// A validated partial update. Fields left `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
    pub deadline_at: Option<Option<NaiveDateTime>>,
}

/// Predicate list for store queries. Predicates combine with logical AND.
#[derive(Debug, Clone, Default)]
pub struct TodoFilter {
    /// Keep only records whose `completed` flag equals this value.
    pub completed: Option<bool>,
    /// Keep only records whose `deadline_at` is at or before this instant.
    pub due_within: Option<NaiveDateTime>,
}
