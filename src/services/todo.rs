//! Todo service: validation, timestamping, and CRUD orchestration.

use std::sync::Arc;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::db::{RepositoryError, TodoRepository};
use crate::models::{Todo, TodoId};

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error taxonomy of the service layer.
///
/// `NotFound` and `InvalidArgument` are raised at the service boundary and
/// never retried; the HTTP layer maps them to 404 and 400. Repository
/// failures pass through unchanged and surface as 500.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The requested id does not exist in the store.
    #[error("not found: {0}")]
    NotFound(String),

    /// Required input is missing or empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store failed the operation.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Incoming todo fields for create and update operations.
///
/// Both fields are optional on the wire: create validates that both are
/// present and non-empty, update merges only the present, non-empty ones.
/// `id` and `dateTime` are never accepted from the client; unknown body
/// fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Service for managing todo items.
///
/// Holds no state besides the repository handle; each request re-fetches
/// from the store.
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
}

impl TodoService {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<dyn TodoRepository>) -> Self {
        Self { repository }
    }

    /// Retrieve all todo items as a snapshot in store iteration order.
    pub async fn list_all(&self) -> ServiceResult<Vec<Todo>> {
        info!("Fetching all todo items from the repository");
        let todos = self.repository.find_all().await?;
        info!("Retrieved {} todo items", todos.len());
        Ok(todos)
    }

    /// Retrieve a todo item by its unique identifier.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] if no item with the given id exists.
    pub async fn get_by_id(&self, id: TodoId) -> ServiceResult<Todo> {
        info!("Fetching todo item with id {}", id);
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Todo item with id {} not found", id);
            ServiceError::NotFound(format!("Todo item not found with id: {}", id))
        })
    }

    /// Create a new todo item.
    ///
    /// Sets `date_time` to now and persists; the store assigns the id.
    ///
    /// # Errors
    /// [`ServiceError::InvalidArgument`] if title or description is missing
    /// or empty. Nothing is persisted in that case.
    pub async fn create(&self, input: TodoInput) -> ServiceResult<Todo> {
        info!("Attempting to create a new todo item");

        let title = require_field(input.title, "title")?;
        let description = require_field(input.description, "description")?;

        let todo = Todo {
            id: None,
            title,
            description,
            date_time: Local::now().naive_local(),
        };
        let saved = self.repository.save(todo).await?;
        if let Some(id) = saved.id {
            info!("Successfully created todo item with id {}", id);
        }
        Ok(saved)
    }

    /// Update an existing todo item.
    ///
    /// For each of title/description, the stored value is replaced only when
    /// the incoming value is present and non-empty; `date_time` is always
    /// refreshed. Returns the merged record.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] if no item with the given id exists.
    pub async fn update(&self, input: TodoInput, id: TodoId) -> ServiceResult<Todo> {
        info!("Updating todo item with id {}", id);

        let mut existing = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Todo item with id {} not found", id);
            ServiceError::NotFound(format!("Todo item not found with id: {}", id))
        })?;

        if let Some(title) = input.title.filter(|t| !t.is_empty()) {
            existing.title = title;
        }
        if let Some(description) = input.description.filter(|d| !d.is_empty()) {
            existing.description = description;
        }
        existing.date_time = Local::now().naive_local();

        let updated = self.repository.save(existing).await?;
        info!("Successfully updated todo item with id {}", id);
        Ok(updated)
    }

    /// Delete a todo item by its unique identifier.
    ///
    /// # Errors
    /// [`ServiceError::NotFound`] if no item with the given id exists; the
    /// store is left unchanged in that case.
    pub async fn delete_by_id(&self, id: TodoId) -> ServiceResult<()> {
        info!("Attempting to delete todo item with id {}", id);

        if self.repository.find_by_id(id).await?.is_none() {
            warn!("Todo item with id {} not found", id);
            return Err(ServiceError::NotFound(format!(
                "Todo item not found with id: {}",
                id
            )));
        }

        self.repository.delete_by_id(id).await?;
        info!("Successfully deleted todo item with id {}", id);
        Ok(())
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> ServiceResult<bool> {
        Ok(self.repository.health_check().await?)
    }
}

/// Extract a required field, rejecting absent and empty values.
fn require_field(value: Option<String>, name: &str) -> ServiceResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => {
            warn!("Failed to create todo: {} cannot be null or empty", name);
            Err(ServiceError::InvalidArgument(format!(
                "Todo {} cannot be null or empty",
                name
            )))
        }
    }
}
