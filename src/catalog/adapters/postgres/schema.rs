//! Diesel schema for catalog record persistence.

diesel::table! {
    /// Catalog records (book entries).
    books (id) {
        /// Record identifier, generated at insert.
        id -> Uuid,
        /// Book title; an empty title marks the record incomplete.
        title -> Text,
        /// Book author.
        author -> Text,
        /// Edition number; positivity is enforced by a table constraint.
        edition -> Int4,
        /// External catalog identifier; empty marks the record incomplete.
        isbn -> Text,
        /// Creation timestamp, defaulted by the database at insert.
        created_at -> Timestamptz,
        /// Last-modification timestamp, refreshed on every update.
        updated_at -> Timestamptz,
    }
}
