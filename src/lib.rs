//! # Todo REST Backend
//!
//! A CRUD REST backend for managing todo items in a document store.
//!
//! This crate exposes HTTP endpoints for listing, fetching, creating,
//! updating, and deleting todo records, delegating persistence to a
//! repository abstraction over an in-memory document store.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Persisted entity types and the document identifier
//! - [`db`]: Repository trait and store implementations
//! - [`services`]: Business logic (validation, timestamping, update merge)
//! - [`http`]: Axum-based HTTP server, DTOs, and request handlers
//! - [`config`]: Server configuration from environment variables
//!
//! Control flow is strictly top-down per request: handler → service →
//! repository → store, with errors mapped back to HTTP status codes at the
//! boundary. There is no shared mutable state outside the store and no
//! background work; every operation is a single call into the repository.

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod services;
