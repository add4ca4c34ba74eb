use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde::{Deserialize, Serialize};

use crate::errors::TodoError;
use crate::todo::{NewTodo, Todo, TodoQueryParams, TodoService};
use crate::types::DocumentId;

use super::access::log_request;

/// Shared state type
type ServiceState = Arc<TodoService>;

/// Body of a successful create.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: DocumentId,
}

/// Build the todo router, mounted under `prefix` (`""` or `"/"` for the root).
pub fn router(service: Arc<TodoService>, prefix: &str) -> Router {
    let todos = Router::new()
        .route("/todos", get(list_handler).post(create_handler))
        .route("/todos/{id}", get(get_handler).delete(delete_handler))
        .with_state(service);

    let prefix = prefix.trim_end_matches('/');
    let app = if prefix.is_empty() {
        todos
    } else if prefix.starts_with('/') {
        Router::new().nest(prefix, todos)
    } else {
        Router::new().nest(&format!("/{prefix}"), todos)
    };
    app.layer(middleware::from_fn(log_request))
}

/// List todos handler
async fn list_handler(
    State(service): State<ServiceState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Todo>>, TodoError> {
    let params = TodoQueryParams::from_pairs(query);
    Ok(Json(service.list(&params)?))
}

/// Get single todo handler
async fn get_handler(
    State(service): State<ServiceState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, TodoError> {
    Ok(Json(service.get(&id)?))
}

/// Create todo handler
async fn create_handler(
    State(service): State<ServiceState>,
    payload: Result<Json<NewTodo>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), TodoError> {
    let Json(candidate) =
        payload.map_err(|e| TodoError::Validation(format!("invalid todo body: {}", e.body_text())))?;
    let id = service.create(candidate)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Delete todo handler
async fn delete_handler(
    State(service): State<ServiceState>,
    Path(id): Path<String>,
) -> Result<StatusCode, TodoError> {
    service.delete(&id)?;
    Ok(StatusCode::OK)
}
