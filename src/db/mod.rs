//! Persistence layer for todo documents.
//!
//! This module provides abstractions for store operations via the Repository
//! pattern, allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP Layer (http/) - axum handlers                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services/) - validation, timestamps     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository.rs) - Abstract Interface  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │          (in-memory document store)           │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is no global repository singleton: the backend is constructed once
//! at process start in the server binary and handed to the routing layer by
//! ownership.

pub mod repositories;
pub mod repository;

pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, TodoRepository};
