//! HTTP transport for the todo backend.
//!
//! # Design
//! Handlers only decode, delegate to `TodoEndpoints` and encode; every
//! decision about todos lives in `todo-core`. Path parameters are read as a
//! raw map so a route/handler mismatch surfaces as `ApiError::BadRouting`
//! instead of being mistaken for a client error.

pub mod config;
pub mod error;

use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, Method, StatusCode},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use todo_core::{
    CreateTodoRequest, InMemoryTodoService, TodoEndpoints, TodoResponse, UpdateTodoRequest,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{ApiError, ErrorBody};

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Router over a fresh in-memory store.
pub fn app(config: &Config) -> Router {
    let endpoints = TodoEndpoints::new(Arc::new(InMemoryTodoService::new()), config.public_base());
    tracing::info!(base_path = endpoints.base_path(), "in-memory todo store ready");
    router(endpoints)
}

pub fn router(endpoints: TodoEndpoints) -> Router {
    Router::new()
        .route(
            "/",
            get(list_todos).post(create_todo).delete(delete_all_todos),
        )
        .route(
            "/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(endpoints)
}

pub async fn run(
    listener: TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

fn path_id(params: &HashMap<String, String>) -> Result<&str, ApiError> {
    params
        .get("id")
        .map(String::as_str)
        .ok_or(ApiError::BadRouting)
}

async fn create_todo(
    State(endpoints): State<TodoEndpoints>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(endpoints.create(request)))
}

async fn list_todos(State(endpoints): State<TodoEndpoints>) -> Json<Vec<TodoResponse>> {
    Json(endpoints.list_all())
}

async fn get_todo(
    State(endpoints): State<TodoEndpoints>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = path_id(&params)?;
    Ok(Json(endpoints.get(id)?))
}

async fn update_todo(
    State(endpoints): State<TodoEndpoints>,
    Path(params): Path<HashMap<String, String>>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<Json<TodoResponse>, ApiError> {
    let id = path_id(&params)?;
    let Json(mut request) = payload?;
    request.id = id.to_string();
    Ok(Json(endpoints.update(request)?))
}

async fn delete_todo(
    State(endpoints): State<TodoEndpoints>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(&params)?;
    endpoints.delete_one(id)?;
    Ok(StatusCode::OK)
}

async fn delete_all_todos(State(endpoints): State<TodoEndpoints>) -> StatusCode {
    endpoints.delete_all();
    StatusCode::OK
}
