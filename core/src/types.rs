//! Domain entity and wire DTOs for the todo backend.
//!
//! # Design
//! `Todo` is the stored record and never leaves the core as-is: the
//! translation layer converts it into `TodoResponse`, which carries the
//! presentation-only `url`. Request types are decoded straight from JSON
//! bodies; optional update fields stay `Option` so "omitted" and "set to
//! zero/false" remain distinguishable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub order: i64,
    pub completed: bool,
}

impl Todo {
    /// Build a fresh, uncompleted todo with a random v4 id.
    pub fn new(title: String, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            order,
            completed: false,
        }
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub order: i64,
}

/// Partial update of an existing todo. `id` comes from the request path,
/// never from the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(skip)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// A todo formatted for clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoResponse {
    pub id: String,
    pub title: String,
    pub order: i64,
    pub completed: bool,
    pub url: String,
}

impl TodoResponse {
    pub fn from_todo(todo: Todo, base_path: &str) -> Self {
        let id = todo.id.to_string();
        Self {
            url: format!("{base_path}/{id}"),
            id,
            title: todo.title,
            order: todo.order,
            completed: todo.completed,
        }
    }
}
