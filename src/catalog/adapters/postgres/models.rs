//! Diesel row models for catalog record persistence.

use super::schema::books;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for catalog records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Edition number.
    pub edition: i32,
    /// External catalog identifier.
    pub isbn: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for catalog records.
///
/// Timestamps are omitted so the database defaults assign them at insert.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub struct NewBookRow {
    /// Record identifier.
    pub id: uuid::Uuid,
    /// Book title.
    pub title: String,
    /// Book author.
    pub author: String,
    /// Edition number.
    pub edition: i32,
    /// External catalog identifier.
    pub isbn: String,
}
