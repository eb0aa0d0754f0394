//! Port contracts for catalog record persistence.
//!
//! Ports define infrastructure-agnostic interfaces consumed by the registry
//! service; adapters supply the durable and in-memory implementations.

pub mod repository;

pub use repository::{BookRepository, BookRepositoryError, BookRepositoryResult};
