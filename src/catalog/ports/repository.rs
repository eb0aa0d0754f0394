//! Repository port for catalog record persistence.

use crate::catalog::domain::{Book, BookId, NewBook};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use thiserror::Error;

/// Result type for catalog repository operations.
pub type BookRepositoryResult<T> = Result<T, BookRepositoryError>;

/// Catalog record persistence contract.
///
/// The repository is the sole authority on record existence. Implementations
/// must be safe under arbitrary concurrent invocation from independently
/// scheduled workers; each operation is a single atomic unit, and no caller
/// ever observes a partially applied mutation.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Stores a new record, assigning its identity and both timestamps, and
    /// returns the fully populated record.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::Backend`] on constraint violation or
    /// connectivity failure.
    async fn create(&self, fields: NewBook) -> BookRepositoryResult<Book>;

    /// Retrieves the record with the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::NotFound`] when no record has that
    /// identity, or [`BookRepositoryError::Backend`] for any other retrieval
    /// failure.
    async fn find_by_id(&self, id: &BookId) -> BookRepositoryResult<Book>;

    /// Replaces every mutable field of the record with the given identity
    /// and refreshes its modification timestamp. Identity and the creation
    /// timestamp are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::NotFound`] when the identity does not
    /// exist, or [`BookRepositoryError::Backend`] otherwise.
    async fn update(&self, id: &BookId, fields: NewBook) -> BookRepositoryResult<Book>;

    /// Removes the record with the given identity. Zero affected entries is
    /// not success.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::NotFound`] when the identity does not
    /// exist, or [`BookRepositoryError::Backend`] otherwise.
    async fn delete(&self, id: &BookId) -> BookRepositoryResult<()>;

    /// Returns all currently stored records in backend-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::Backend`] on retrieval failure.
    async fn list(&self) -> BookRepositoryResult<Vec<Book>>;
}

/// Errors returned by catalog repository implementations.
///
/// Backend-native error values never cross this boundary; implementations
/// normalize every outcome to one of these variants.
#[derive(Debug, Clone, Error)]
pub enum BookRepositoryError {
    /// No record with the given identity exists.
    #[error("book not found: {0}")]
    NotFound(BookId),

    /// Storage-layer failure: constraint violation, connectivity loss,
    /// driver error, or a call abandoned mid-operation.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl BookRepositoryError {
    /// Wraps a backend-native error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
