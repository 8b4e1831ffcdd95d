//! In-memory persistence gateway.
//!
//! # Design
//! A `tokio::sync::RwLock` around a `BTreeMap` keyed by id, with a sequential
//! counter for id assignment. Every method takes the lock exactly once, so
//! each single-record read or write is atomic; concurrent updates to the same
//! id are last-writer-wins. The BTreeMap gives `list` a stable id order.
//!
//! Filtering lives here rather than in the service so the gateway keeps the
//! "predicate list in, matching records out" query contract a relational
//! backend would also satisfy.

use std::collections::BTreeMap;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::model::{NewTodo, Todo, TodoFilter, TodoPatch};

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all records matching the filter, in id order.
    pub async fn list(&self, filter: &TodoFilter) -> Vec<Todo> {
        let inner = self.inner.read().await;
        inner
            .todos
            .values()
            .filter(|todo| matches(todo, filter))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Option<Todo> {
        self.inner.read().await.todos.get(&id).cloned()
    }

    /// Persists a new record, assigning its id and both timestamps.
    pub async fn insert(&self, new: NewTodo) -> Todo {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let now = Utc::now().naive_utc();
        let todo = Todo {
            id: inner.next_id,
            title: new.title,
            description: new.description,
            completed: new.completed,
            deadline_at: new.deadline_at,
            created_at: now,
            updated_at: now,
        };
        inner.todos.insert(todo.id, todo.clone());
        todo
    }

    /// Merges the patch into the stored record and refreshes `updated_at`.
    /// Returns `None` if no record has this id.
    pub async fn update(&self, id: i64, patch: TodoPatch) -> Option<Todo> {
        let mut inner = self.inner.write().await;
        let todo = inner.todos.get_mut(&id)?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = description;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        if let Some(deadline_at) = patch.deadline_at {
            todo.deadline_at = deadline_at;
        }
        todo.updated_at = Utc::now().naive_utc();
        Some(todo.clone())
    }

    /// Removes the record and returns the value it held, `None` if absent.
    pub async fn remove(&self, id: i64) -> Option<Todo> {
        self.inner.write().await.todos.remove(&id)
    }
}

fn matches(todo: &Todo, filter: &TodoFilter) -> bool {
    if let Some(completed) = filter.completed {
        if todo.completed != completed {
            return false;
        }
    }
    if let Some(bound) = filter.due_within {
        // A record without a deadline never falls inside a window.
        match todo.deadline_at {
            Some(deadline) if deadline <= bound => {}
            _ => return false,
        }
    }
    true
}
