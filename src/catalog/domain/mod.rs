//! Domain model for catalog records.
//!
//! The catalog domain models book entries: identity, descriptive fields,
//! lifecycle timestamps, and the completeness invariant that governs
//! listing visibility. All infrastructure concerns are kept outside the
//! domain boundary.

mod book;
mod ids;

pub use book::{Book, NewBook, PersistedBook};
pub use ids::BookId;
