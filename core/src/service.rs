//! The todo store: contract and in-memory implementation.
//!
//! # Design
//! `TodoService` is object safe and `Send + Sync` so one store can be shared
//! behind `Arc<dyn TodoService>` by every request handler.
//! `InMemoryTodoService` guards its map with a single `Mutex` taken exactly
//! once per operation, which makes each operation atomic. Callers only ever
//! receive clones; mutating them does not touch the store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::error::TodoError;
use crate::types::Todo;

/// Store operations over the todo collection.
pub trait TodoService: Send + Sync {
    fn create(&self, title: String, order: i64) -> Todo;

    fn get(&self, id: Uuid) -> Result<Todo, TodoError>;

    /// Every stored todo, in no particular order.
    fn list_all(&self) -> Vec<Todo>;

    fn update_title(&self, id: Uuid, title: String) -> Result<Todo, TodoError>;

    fn update_order(&self, id: Uuid, order: i64) -> Result<Todo, TodoError>;

    /// Mark a todo as completed. There is no inverse operation.
    fn complete(&self, id: Uuid) -> Result<Todo, TodoError>;

    fn delete_one(&self, id: Uuid) -> Result<(), TodoError>;

    fn delete_all(&self);
}

#[derive(Debug, Default)]
pub struct InMemoryTodoService {
    todos: Mutex<HashMap<Uuid, Todo>>,
}

impl InMemoryTodoService {
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single insert, remove or clear; a poisoned map is
    // still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Todo>> {
        self.todos.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read-modify-write of one record under a single lock acquisition.
    fn update_with(&self, id: Uuid, apply: impl FnOnce(&mut Todo)) -> Result<Todo, TodoError> {
        let mut todos = self.lock();
        let Some(existing) = todos.get(&id) else {
            tracing::debug!(%id, "todo not found");
            return Err(TodoError::NotFound(id));
        };
        let mut updated = existing.clone();
        apply(&mut updated);
        todos.insert(id, updated.clone());
        Ok(updated)
    }
}

impl TodoService for InMemoryTodoService {
    fn create(&self, title: String, order: i64) -> Todo {
        let todo = Todo::new(title, order);
        self.lock().insert(todo.id, todo.clone());
        todo
    }

    fn get(&self, id: Uuid) -> Result<Todo, TodoError> {
        match self.lock().get(&id) {
            Some(todo) => Ok(todo.clone()),
            None => {
                tracing::debug!(%id, "todo not found");
                Err(TodoError::NotFound(id))
            }
        }
    }

    fn list_all(&self) -> Vec<Todo> {
        self.lock().values().cloned().collect()
    }

    fn update_title(&self, id: Uuid, title: String) -> Result<Todo, TodoError> {
        self.update_with(id, |todo| todo.title = title)
    }

    fn update_order(&self, id: Uuid, order: i64) -> Result<Todo, TodoError> {
        self.update_with(id, |todo| todo.order = order)
    }

    fn complete(&self, id: Uuid) -> Result<Todo, TodoError> {
        self.update_with(id, |todo| todo.completed = true)
    }

    fn delete_one(&self, id: Uuid) -> Result<(), TodoError> {
        self.lock()
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoError::NotFound(id))
    }

    fn delete_all(&self) {
        self.lock().clear();
    }
}

#[cfg(test)]
impl InMemoryTodoService {
    fn len(&self) -> usize {
        self.lock().len()
    }

    fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
