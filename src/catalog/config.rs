//! Startup selection of the catalog storage backend.
//!
//! The registry service depends only on the repository port; this module is
//! where a host process picks the concrete backend, driven by environment
//! configuration.

use crate::catalog::{
    adapters::{memory::InMemoryBookRepository, postgres::PostgresBookRepository},
    ports::{BookRepository, BookRepositoryError},
};
use std::sync::Arc;

/// Environment variable naming the durable backend's connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Storage backend selected at process startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageSettings {
    /// In-process concurrent map; no external connectivity.
    Memory,
    /// Durable `PostgreSQL` store reachable via a connection string.
    Postgres {
        /// Connection string for the catalog database.
        database_url: String,
    },
}

impl StorageSettings {
    /// Reads the backend selection from the environment.
    ///
    /// A non-empty `DATABASE_URL` selects the durable backend; otherwise
    /// the in-memory backend is used.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var(DATABASE_URL_VAR)
            .ok()
            .filter(|value| !value.is_empty())
            .map_or(Self::Memory, |database_url| Self::Postgres { database_url })
    }

    /// Builds the selected repository.
    ///
    /// The durable backend is probed immediately so an unreachable database
    /// fails startup rather than the first call.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::Backend`] when the durable backend
    /// cannot be reached.
    pub fn build(&self) -> Result<Arc<dyn BookRepository>, BookRepositoryError> {
        match self {
            Self::Memory => {
                tracing::info!("using in-memory catalog storage");
                Ok(Arc::new(InMemoryBookRepository::new()))
            }
            Self::Postgres { database_url } => {
                tracing::info!("connecting to durable catalog storage");
                Ok(Arc::new(PostgresBookRepository::connect(database_url)?))
            }
        }
    }
}
