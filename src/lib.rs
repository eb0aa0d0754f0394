//! Libris: a remotely callable registry of catalog records.
//!
//! This crate is the concurrency-safe core of a book catalog service: it
//! guarantees consistent reads and writes under concurrent remote calls,
//! translates storage outcomes into a stable error taxonomy, and enforces
//! the record lifecycle invariants (identity assignment, validity
//! filtering, non-idempotent deletion).
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: pure record model with no infrastructure dependencies
//! - **Ports**: the abstract storage backend contract
//! - **Adapters**: durable (`PostgreSQL`) and in-memory implementations
//! - **Services**: the registry orchestration layer a transport embeds
//!
//! The RPC transport, method dispatch, and process bootstrap are external
//! collaborators; a host decodes requests into the typed operations of
//! [`catalog::services::LibraryService`] and re-encodes the returned
//! records or mapped errors.

pub mod catalog;
