//! HTTP server module for the todo backend.
//!
//! This module provides an axum-based HTTP server that exposes the todo
//! CRUD operations as a REST API. It reuses the service layer, repository
//! pattern, and domain model from the core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Path id parsing and JSON (de)serialization             │
//! │  - CORS, request tracing, error mapping                   │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Field validation, timestamping, update merge           │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - Document persistence (LocalRepository)                 │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;

pub mod error;

pub mod handlers;

pub mod router;

pub mod state;

pub use router::create_router;

pub use state::AppState;
