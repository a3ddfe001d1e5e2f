//! HTTP error mapping.
//!
//! # Design
//! Store and translation failures keep their identity all the way here and
//! are mapped to status codes in one place. Every error body is
//! `{"error": "<message>"}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use todo_core::TodoError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    /// The request body was not valid JSON for the endpoint.
    #[error(transparent)]
    Body(#[from] JsonRejection),

    /// An expected path parameter is missing. Always a wiring defect.
    #[error("inconsistent mapping between route and handler (programmer error)")]
    BadRouting,
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Todo(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Todo(TodoError::InvalidId { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::BadRouting => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::BadRouting => tracing::error!(error = %self, "bad routing"),
            ApiError::Body(_) => tracing::debug!(error = %self, "rejected request body"),
            ApiError::Todo(_) => {}
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
