//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an endpoint and delegates to the service
//! layer for business logic. Path ids are parsed uniformly here: a segment
//! that is not a valid 24-hex identifier is a client error on every route.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::dto::{HealthResponse, TodoDto, TodoInput};
use super::error::AppError;
use super::state::AppState;
use crate::models::TodoId;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Parse a path segment into a store identifier.
fn parse_id(raw: &str) -> Result<TodoId, AppError> {
    raw.parse::<TodoId>().map_err(AppError::BadRequest)
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.service.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database,
    }))
}

// =============================================================================
// Todo CRUD
// =============================================================================

/// GET /api/todos
///
/// List all todo items.
pub async fn list_todos(State(state): State<AppState>) -> HandlerResult<Vec<TodoDto>> {
    let todos = state.service.list_all().await?;
    Ok(Json(todos.into_iter().map(TodoDto::from).collect()))
}

/// GET /api/todos/{id}
///
/// Fetch a single todo item.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<TodoDto> {
    let id = parse_id(&id)?;
    let todo = state.service.get_by_id(id).await?;
    Ok(Json(TodoDto::from(todo)))
}

/// POST /api/todos
///
/// Create a new todo item. The server assigns id and dateTime.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(input): Json<TodoInput>,
) -> Result<(StatusCode, Json<TodoDto>), AppError> {
    let created = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(TodoDto::from(created))))
}

/// PUT /api/todos/{id}
///
/// Merge the supplied fields into an existing todo item.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<TodoInput>,
) -> HandlerResult<TodoDto> {
    let id = parse_id(&id)?;
    let updated = state.service.update(input, id).await?;
    Ok(Json(TodoDto::from(updated)))
}

/// DELETE /api/todos/{id}
///
/// Delete a todo item.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
