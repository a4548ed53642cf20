//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository. They validate
//! input invariants, stamp timestamps, and implement the partial-update
//! merge; everything else is delegated to the store.

pub mod todo;

pub use todo::{ServiceError, ServiceResult, TodoInput, TodoService};
