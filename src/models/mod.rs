//! Domain model types.
//!
//! This module contains the persisted entity types and their identifiers.
//! Wire-format DTOs live in [`crate::http::dto`]; the types here are what
//! the repository layer stores and the service layer operates on.

pub mod todo;

pub use todo::{Todo, TodoId};

#[cfg(test)]
#[path = "todo_tests.rs"]
mod todo_tests;
