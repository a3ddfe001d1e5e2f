//! Store and translation core for the todo backend.
//!
//! # Overview
//! Holds the authoritative in-memory todo collection and the mapping between
//! external request/response shapes and store operations. Nothing here does
//! I/O; the `todo-server` crate wires it to HTTP.
//!
//! # Design
//! - `TodoService` is the store contract; `InMemoryTodoService` implements it
//!   with one mutex around a `HashMap`, making each operation atomic.
//! - `TodoEndpoints` receives the store by injection and adds the derived
//!   `url` field to every outgoing item.
//! - Failures are `TodoError`: `NotFound` for absent ids, `InvalidId` for ids
//!   that do not parse.

pub mod endpoints;
pub mod error;
pub mod service;
pub mod types;

pub use endpoints::TodoEndpoints;
pub use error::TodoError;
pub use service::{InMemoryTodoService, TodoService};
pub use types::{CreateTodoRequest, Todo, TodoResponse, UpdateTodoRequest};
