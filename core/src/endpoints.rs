//! Translation between external request/response shapes and the store.
//!
//! # Design
//! `TodoEndpoints` owns nothing but an `Arc` to the injected store and the
//! public base path used for `url`. Ids arrive as text and are parsed here,
//! so a malformed id surfaces as `InvalidId` before the store is consulted.
//! Every call emits one `debug` event with the request and its outcome.

use std::fmt::Debug;
use std::sync::Arc;

use uuid::Uuid;

use crate::error::TodoError;
use crate::service::TodoService;
use crate::types::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};

#[derive(Clone)]
pub struct TodoEndpoints {
    service: Arc<dyn TodoService>,
    base_path: String,
}

impl TodoEndpoints {
    pub fn new(service: Arc<dyn TodoService>, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        Self {
            service,
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn create(&self, request: CreateTodoRequest) -> TodoResponse {
        let created = self.service.create(request.title.clone(), request.order);
        let response = TodoResponse::from_todo(created, &self.base_path);
        tracing::debug!(op = "create", ?request, ?response);
        response
    }

    pub fn list_all(&self) -> Vec<TodoResponse> {
        let todos: Vec<TodoResponse> = self
            .service
            .list_all()
            .into_iter()
            .map(|todo| TodoResponse::from_todo(todo, &self.base_path))
            .collect();
        tracing::debug!(op = "list_all", count = todos.len());
        todos
    }

    pub fn get(&self, id: &str) -> Result<TodoResponse, TodoError> {
        let result = parse_id(id)
            .and_then(|id| self.service.get(id))
            .map(|todo| TodoResponse::from_todo(todo, &self.base_path));
        log_outcome("get", &id, &result);
        result
    }

    /// Apply a partial update: complete (only when `completed` is `true`),
    /// then title, then order, then return the re-fetched state.
    pub fn update(&self, request: UpdateTodoRequest) -> Result<TodoResponse, TodoError> {
        let result = self.apply_update(&request);
        log_outcome("update", &request, &result);
        result
    }

    pub fn delete_one(&self, id: &str) -> Result<(), TodoError> {
        let result = parse_id(id).and_then(|id| self.service.delete_one(id));
        log_outcome("delete_one", &id, &result);
        result
    }

    pub fn delete_all(&self) {
        self.service.delete_all();
        tracing::debug!(op = "delete_all");
    }

    fn apply_update(&self, request: &UpdateTodoRequest) -> Result<TodoResponse, TodoError> {
        let id = parse_id(&request.id)?;

        if request.completed == Some(true) {
            self.service.complete(id)?;
        }
        if let Some(title) = &request.title {
            self.service.update_title(id, title.clone())?;
        }
        if let Some(order) = request.order {
            self.service.update_order(id, order)?;
        }

        let todo = self.service.get(id)?;
        Ok(TodoResponse::from_todo(todo, &self.base_path))
    }
}

fn parse_id(input: &str) -> Result<Uuid, TodoError> {
    Uuid::parse_str(input).map_err(|source| TodoError::InvalidId {
        input: input.to_string(),
        source,
    })
}

fn log_outcome<R: Debug, T: Debug>(op: &str, request: &R, result: &Result<T, TodoError>) {
    match result {
        Ok(response) => tracing::debug!(op = op, ?request, ?response),
        Err(error) => tracing::debug!(op = op, ?request, %error),
    }
}
