//! In-memory document store implementation of [`TodoRepository`].
//!
//! Backs the server by default and doubles as the test double for the
//! service and HTTP layers. Documents live in a `HashMap` behind a
//! `tokio::sync::RwLock`; writers take the lock exclusively, so concurrent
//! writes serialize at the store with last-write-wins semantics per
//! document.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::repository::{RepositoryResult, TodoRepository};
use crate::models::{Todo, TodoId};

/// In-memory todo collection.
#[derive(Debug, Default)]
pub struct LocalRepository {
    documents: RwLock<HashMap<TodoId, Todo>>,
}

impl LocalRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the store holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl TodoRepository for LocalRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Todo>> {
        let documents = self.documents.read().await;
        Ok(documents.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TodoId) -> RepositoryResult<Option<Todo>> {
        let documents = self.documents.read().await;
        Ok(documents.get(&id).cloned())
    }

    async fn save(&self, mut todo: Todo) -> RepositoryResult<Todo> {
        let id = match todo.id {
            Some(id) => id,
            None => {
                let id = TodoId::generate();
                todo.id = Some(id);
                id
            }
        };
        let mut documents = self.documents.write().await;
        documents.insert(id, todo.clone());
        Ok(todo)
    }

    async fn delete_by_id(&self, id: TodoId) -> RepositoryResult<bool> {
        let mut documents = self.documents.write().await;
        Ok(documents.remove(&id).is_some())
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
