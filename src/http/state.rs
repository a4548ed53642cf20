//! Application state for the HTTP server.

use std::sync::Arc;

use crate::services::TodoService;

/// Shared application state passed to all handlers.
///
/// Built once at process start in the server binary and never mutated; the
/// router clones the `Arc` handle per request.
#[derive(Clone)]
pub struct AppState {
    /// Service instance backing all endpoints
    pub service: Arc<TodoService>,
}

impl AppState {
    /// Create a new application state with the given service.
    pub fn new(service: Arc<TodoService>) -> Self {
        Self { service }
    }
}
