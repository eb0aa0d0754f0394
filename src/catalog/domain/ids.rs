//! Identifier types for the catalog domain.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a catalog record.
///
/// Identity is assigned exactly once, at creation time, by whichever storage
/// backend holds the record, and is immutable thereafter. The wrapped form is
/// backend-specific: the in-memory backend issues sixteen random bytes
/// hex-encoded, the durable backend the string form of a stored UUID key.
/// Identifiers are never reused after deletion within a backend instance's
/// lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    /// Creates a fresh identifier from sixteen random bytes, hex-encoded.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Wraps an identifier already issued by a storage backend.
    #[must_use]
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
