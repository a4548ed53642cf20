//! Repository implementations module.
//!
//! Concrete backends for the [`TodoRepository`](crate::db::TodoRepository)
//! trait. Only the in-memory `local` backend exists; a networked document
//! database would plug in here as a sibling module.

pub mod local;

pub use local::LocalRepository;
