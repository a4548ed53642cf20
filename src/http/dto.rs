//! Data Transfer Objects for the HTTP API.
//!
//! These decouple the wire format from the storage schema: the persisted
//! entity carries its native identifier type, the DTO carries its 24-hex
//! string form. Field names on the wire are camelCase, so the timestamp
//! serializes as `dateTime` in ISO-8601 local form without an offset.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::Todo;

pub use crate::services::todo::TodoInput;

/// External representation of a todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
    /// String form of the store identifier
    pub id: String,
    pub title: String,
    pub description: String,
    /// Created-or-updated timestamp, always server-set
    pub date_time: NaiveDateTime,
}

impl From<Todo> for TodoDto {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo
                .id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            title: todo.title,
            description: todo.description,
            date_time: todo.date_time,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Store connection status
    pub database: String,
}
