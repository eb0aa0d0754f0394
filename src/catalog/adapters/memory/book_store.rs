//! In-memory catalog repository guarded by a readers-writer lock.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::catalog::{
    domain::{Book, BookId, NewBook},
    ports::{BookRepository, BookRepositoryError, BookRepositoryResult},
};

/// Thread-safe in-memory catalog repository.
///
/// A single readers-writer lock guards the whole record collection:
/// create/update/delete take the exclusive lock, get/list take the shared
/// lock, and the lock is held for exactly one operation. Identity is
/// sixteen random bytes hex-encoded, assigned at insert.
#[derive(Clone)]
pub struct InMemoryBookRepository {
    books: Arc<RwLock<HashMap<BookId, Book>>>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl InMemoryBookRepository {
    /// Creates an empty repository using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }

    /// Creates an empty repository with an injected clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            books: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(err: impl std::fmt::Display) -> BookRepositoryError {
    BookRepositoryError::backend(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn create(&self, fields: NewBook) -> BookRepositoryResult<Book> {
        let timestamp = self.clock.utc();
        let mut books = self.books.write().map_err(poisoned)?;

        let mut id = BookId::random();
        while books.contains_key(&id) {
            id = BookId::random();
        }

        let book = Book::create(id.clone(), fields, timestamp);
        books.insert(id, book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: &BookId) -> BookRepositoryResult<Book> {
        let books = self.books.read().map_err(poisoned)?;
        books
            .get(id)
            .cloned()
            .ok_or_else(|| BookRepositoryError::NotFound(id.clone()))
    }

    async fn update(&self, id: &BookId, fields: NewBook) -> BookRepositoryResult<Book> {
        let timestamp = self.clock.utc();
        let mut books = self.books.write().map_err(poisoned)?;
        let book = books
            .get_mut(id)
            .ok_or_else(|| BookRepositoryError::NotFound(id.clone()))?;
        book.replace_fields(fields, timestamp);
        Ok(book.clone())
    }

    async fn delete(&self, id: &BookId) -> BookRepositoryResult<()> {
        let mut books = self.books.write().map_err(poisoned)?;
        if books.remove(id).is_none() {
            return Err(BookRepositoryError::NotFound(id.clone()));
        }
        Ok(())
    }

    async fn list(&self) -> BookRepositoryResult<Vec<Book>> {
        let books = self.books.read().map_err(poisoned)?;
        Ok(books.values().cloned().collect())
    }
}
