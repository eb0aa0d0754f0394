//! Catalog record aggregate.

use super::BookId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity-less carrier for the mutable fields of a catalog record.
///
/// Used when creating a record (the backend assigns identity and timestamps)
/// and when replacing the fields of an existing one. No field-level
/// validation happens here: an empty title or ISBN produces a storable but
/// incomplete record, which listings exclude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    title: String,
    author: String,
    edition: i32,
    isbn: String,
}

impl NewBook {
    /// Creates a field carrier for a catalog record.
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

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the edition number.
    #[must_use]
    pub const fn edition(&self) -> i32 {
        self.edition
    }

    /// Returns the external catalog identifier.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

/// A catalog record (book entry).
///
/// Identity and the creation timestamp are immutable once assigned; the
/// modification timestamp moves forward on every successful update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    edition: i32,
    isbn: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a record from persisted storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedBook {
    /// Persisted record identifier.
    pub id: BookId,
    /// Persisted title.
    pub title: String,
    /// Persisted author.
    pub author: String,
    /// Persisted edition number.
    pub edition: i32,
    /// Persisted external catalog identifier.
    pub isbn: String,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Creates a freshly stored record with both timestamps set to
    /// `timestamp`.
    #[must_use]
    pub fn create(id: BookId, fields: NewBook, timestamp: DateTime<Utc>) -> Self {
        let NewBook {
            title,
            author,
            edition,
            isbn,
        } = fields;
        Self {
            id,
            title,
            author,
            edition,
            isbn,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedBook) -> Self {
        Self {
            id: data.id,
            title: data.title,
            author: data.author,
            edition: data.edition,
            isbn: data.isbn,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> &BookId {
        &self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the edition number.
    #[must_use]
    pub const fn edition(&self) -> i32 {
        self.edition
    }

    /// Returns the external catalog identifier.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces every mutable field and refreshes the modification
    /// timestamp. Identity and the creation timestamp are untouched.
    pub fn replace_fields(&mut self, fields: NewBook, timestamp: DateTime<Utc>) {
        let NewBook {
            title,
            author,
            edition,
            isbn,
        } = fields;
        self.title = title;
        self.author = author;
        self.edition = edition;
        self.isbn = isbn;
        self.updated_at = timestamp;
    }

    /// Whether the record satisfies the listing validity invariant.
    ///
    /// A record with an empty title or an empty external catalog identifier
    /// is incomplete: excluded from list results, yet still individually
    /// retrievable by identifier.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.isbn.is_empty()
    }
}
