//! Service layer for the catalog record registry.
//!
//! Provides [`LibraryService`] which orchestrates create, read, update,
//! delete, and list operations over a [`BookRepository`] and maps storage
//! outcomes onto the stable caller-visible error taxonomy the transport
//! layer switches on.

use crate::catalog::{
    domain::{Book, BookId, NewBook},
    ports::{BookRepository, BookRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBookRequest {
    title: String,
    author: String,
    edition: i32,
    isbn: String,
}

impl CreateBookRequest {
    /// Creates a request carrying all record fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        edition: i32,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            edition,
            isbn: isbn.into(),
        }
    }
}

/// Request payload for replacing a catalog record.
///
/// Updates are full replacements: every mutable field is taken from the
/// request, so a caller must resend the complete record. Nothing is merged
/// from the prior value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBookRequest {
    id: BookId,
    title: String,
    author: String,
    edition: i32,
    isbn: String,
}

impl UpdateBookRequest {
    /// Creates a request carrying the record identity and all fields.
    #[must_use]
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        edition: i32,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            edition,
            isbn: isbn.into(),
        }
    }
}

/// Caller-visible errors for catalog registry operations.
///
/// A closed tagged set: the transport layer maps on the variant, never on
/// error text.
#[derive(Debug, Clone, Error)]
pub enum LibraryServiceError {
    /// The requested record identity does not exist.
    #[error("book not found: {0}")]
    NotFound(BookId),

    /// The operation could not be completed.
    #[error("internal catalog error: {0}")]
    Internal(Arc<dyn std::error::Error + Send + Sync>),
}

impl From<BookRepositoryError> for LibraryServiceError {
    fn from(err: BookRepositoryError) -> Self {
        match err {
            BookRepositoryError::NotFound(id) => Self::NotFound(id),
            BookRepositoryError::Backend(source) => Self::Internal(source),
        }
    }
}

/// Result type for catalog registry service operations.
pub type LibraryServiceResult<T> = Result<T, LibraryServiceError>;

/// Catalog registry orchestration service.
///
/// Stateless between calls: every read re-queries the repository, each
/// operation is a single atomic unit with respect to the backend, and no
/// operation is ever retried. The repository is injected at construction,
/// so the service depends only on the port contract.
pub struct LibraryService<R>
where
    R: BookRepository + ?Sized,
{
    repository: Arc<R>,
}

impl<R> Clone for LibraryService<R>
where
    R: BookRepository + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> LibraryService<R>
where
    R: BookRepository + ?Sized,
{
    /// Creates a new catalog registry service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a catalog record from the request fields; the backend
    /// assigns identity and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryServiceError::Internal`] when the backend rejects
    /// the write.
    pub async fn create_book(&self, request: CreateBookRequest) -> LibraryServiceResult<Book> {
        let CreateBookRequest {
            title,
            author,
            edition,
            isbn,
        } = request;
        let fields = NewBook::new(title, author, edition, isbn);
        Ok(self.repository.create(fields).await?)
    }

    /// Retrieves the record with the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryServiceError::NotFound`] when the identity does not
    /// exist, or [`LibraryServiceError::Internal`] for any other backend
    /// failure.
    pub async fn get_book(&self, id: &BookId) -> LibraryServiceResult<Book> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Replaces every mutable field of the identified record.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryServiceError::NotFound`] when the identity does not
    /// exist, or [`LibraryServiceError::Internal`] for any other backend
    /// failure.
    pub async fn update_book(&self, request: UpdateBookRequest) -> LibraryServiceResult<Book> {
        let UpdateBookRequest {
            id,
            title,
            author,
            edition,
            isbn,
        } = request;
        let fields = NewBook::new(title, author, edition, isbn);
        Ok(self.repository.update(&id, fields).await?)
    }

    /// Removes the record with the given identity.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryServiceError::NotFound`] when the identity does not
    /// exist (including a repeated delete), or
    /// [`LibraryServiceError::Internal`] for any other backend failure.
    pub async fn delete_book(&self, id: &BookId) -> LibraryServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Lists all complete records, preserving the backend's relative order
    /// among the retained ones.
    ///
    /// Filtering never fails; only backend retrieval failure surfaces.
    ///
    /// # Errors
    ///
    /// Returns [`LibraryServiceError::Internal`] when the backend cannot be
    /// read.
    pub async fn list_books(&self) -> LibraryServiceResult<Vec<Book>> {
        let books = self.repository.list().await?;
        Ok(books.into_iter().filter(Book::is_complete).collect())
    }
}
