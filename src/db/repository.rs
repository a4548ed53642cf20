//! Repository trait and error types for todo persistence.
//!
//! The trait is the seam between the service layer and a concrete store
//! backend. It intentionally mirrors the generic CRUD surface of a document
//! collection: fetch-all, fetch-by-id, insert-or-replace, delete-by-id. No
//! custom query methods exist; all filtering happens at full-scan
//! granularity or not at all.

use async_trait::async_trait;

use crate::models::{Todo, TodoId};

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
///
/// The service layer maps store-level failures straight to HTTP 500; there
/// is no retry policy and no partial-failure handling.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    /// The store rejected or failed an operation.
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    /// Create a storage error with the given message.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Repository trait for todo documents.
///
/// Implementations must be `Send + Sync` to work with async Rust. The store
/// exclusively owns persisted state: callers hold no cached copies across
/// requests, and concurrent writes are serialized at the document level
/// (last write wins).
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Fetch every todo in store iteration order (no defined sort).
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>>;

    /// Fetch a single todo by id.
    ///
    /// # Returns
    /// * `Ok(Some(todo))` if the id exists
    /// * `Ok(None)` if it does not
    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Option<Todo>>;

    /// Insert or replace a todo.
    ///
    /// When the todo carries no id, the store assigns a fresh one. The saved
    /// record, id populated, is returned.
    async fn save(&self, todo: Todo) -> RepositoryResult<Todo>;

    /// Delete a todo by id.
    ///
    /// # Returns
    /// * `Ok(true)` if a document was removed
    /// * `Ok(false)` if the id did not exist
    async fn delete_by_id(&self, id: TodoId) -> RepositoryResult<bool>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
