//! `PostgreSQL` adapters for catalog record persistence.

mod models;
mod repository;
mod schema;

pub use repository::{CatalogPgPool, PostgresBookRepository};
