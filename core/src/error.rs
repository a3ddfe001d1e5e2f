//! Error types for the todo store and translation layer.
//!
//! # Design
//! `NotFound` and `InvalidId` are kept apart because clients must be able to
//! tell "no such todo" from "that is not an id at all". The transport maps
//! each variant to its own HTTP status.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TodoError {
    /// No todo with this id is stored.
    #[error("todo {0} not found")]
    NotFound(Uuid),

    /// The external id could not be parsed as a UUID.
    #[error("invalid todo id {input:?}: {source}")]
    InvalidId {
        input: String,
        #[source]
        source: uuid::Error,
    },
}

#[cfg(test)]
impl TodoError {
    pub(crate) fn is_not_found(&self) -> bool {
        matches!(self, TodoError::NotFound(_))
    }
}
