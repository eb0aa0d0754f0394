//! `PostgreSQL` repository implementation for catalog records.

use super::{
    models::{BookRow, NewBookRow},
    schema::books,
};
use crate::catalog::{
    domain::{Book, BookId, NewBook, PersistedBook},
    ports::{BookRepository, BookRepositoryError, BookRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use uuid::Uuid;

/// `PostgreSQL` connection pool type used by catalog adapters.
pub type CatalogPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed catalog repository.
///
/// Every mutation runs inside exactly one transaction, committed on success
/// and rolled back on any failure path, so no partial write is ever
/// observable. Blocking Diesel work is moved off the async runtime with
/// `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct PostgresBookRepository {
    pool: CatalogPgPool,
}

impl From<diesel::result::Error> for BookRepositoryError {
    fn from(err: diesel::result::Error) -> Self {
        // Row-existence outcomes are decided from affected-row counts, so
        // every Diesel error normalizes to a backend failure.
        Self::backend(err)
    }
}

impl PostgresBookRepository {
    /// Creates a repository from an existing connection pool.
    #[must_use]
    pub const fn new(pool: CatalogPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url` and verifies
    /// connectivity with a ping query.
    ///
    /// Intended for process startup: an unreachable database fails here,
    /// not on the first operation.
    ///
    /// # Errors
    ///
    /// Returns [`BookRepositoryError::Backend`] when the pool cannot be
    /// built or the ping fails.
    pub fn connect(database_url: &str) -> BookRepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .map_err(BookRepositoryError::backend)?;

        let mut connection = pool.get().map_err(BookRepositoryError::backend)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut connection)
            .map_err(BookRepositoryError::backend)?;
        drop(connection);

        tracing::info!("catalog database reachable");
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> BookRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BookRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BookRepositoryError::backend)?;
            f(&mut connection)
        })
        .await
        .map_err(BookRepositoryError::backend)?
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, fields: NewBook) -> BookRepositoryResult<Book> {
        let new_row = NewBookRow {
            id: Uuid::new_v4(),
            title: fields.title().to_owned(),
            author: fields.author().to_owned(),
            edition: fields.edition(),
            isbn: fields.isbn().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = connection.transaction::<_, BookRepositoryError, _>(|tx_conn| {
                let inserted = diesel::insert_into(books::table)
                    .values(&new_row)
                    .returning(BookRow::as_returning())
                    .get_result::<BookRow>(tx_conn)?;
                Ok(inserted)
            })?;
            Ok(row_to_book(row))
        })
        .await
    }

    async fn find_by_id(&self, id: &BookId) -> BookRepositoryResult<Book> {
        let lookup = id.clone();
        let Some(key) = parse_key(&lookup) else {
            return Err(BookRepositoryError::NotFound(lookup));
        };

        self.run_blocking(move |connection| {
            let row = books::table
                .filter(books::id.eq(key))
                .select(BookRow::as_select())
                .first::<BookRow>(connection)
                .optional()
                .map_err(BookRepositoryError::backend)?;
            row.map(row_to_book)
                .ok_or_else(|| BookRepositoryError::NotFound(lookup))
        })
        .await
    }

    async fn update(&self, id: &BookId, fields: NewBook) -> BookRepositoryResult<Book> {
        let lookup = id.clone();
        let Some(key) = parse_key(&lookup) else {
            return Err(BookRepositoryError::NotFound(lookup));
        };
        let title = fields.title().to_owned();
        let author = fields.author().to_owned();
        let edition = fields.edition();
        let isbn = fields.isbn().to_owned();

        self.run_blocking(move |connection| {
            let row = connection.transaction::<_, BookRepositoryError, _>(|tx_conn| {
                let updated = diesel::update(books::table.filter(books::id.eq(key)))
                    .set((
                        books::title.eq(&title),
                        books::author.eq(&author),
                        books::edition.eq(edition),
                        books::isbn.eq(&isbn),
                        books::updated_at.eq(diesel::dsl::now),
                    ))
                    .returning(BookRow::as_returning())
                    .get_result::<BookRow>(tx_conn)
                    .optional()?;
                updated.ok_or_else(|| BookRepositoryError::NotFound(lookup))
            })?;
            Ok(row_to_book(row))
        })
        .await
    }

    async fn delete(&self, id: &BookId) -> BookRepositoryResult<()> {
        let lookup = id.clone();
        let Some(key) = parse_key(&lookup) else {
            return Err(BookRepositoryError::NotFound(lookup));
        };

        self.run_blocking(move |connection| {
            connection.transaction::<_, BookRepositoryError, _>(|tx_conn| {
                let deleted =
                    diesel::delete(books::table.filter(books::id.eq(key))).execute(tx_conn)?;
                if deleted == 0 {
                    return Err(BookRepositoryError::NotFound(lookup));
                }
                Ok(())
            })
        })
        .await
    }

    async fn list(&self) -> BookRepositoryResult<Vec<Book>> {
        self.run_blocking(move |connection| {
            let rows = books::table
                .select(BookRow::as_select())
                .load::<BookRow>(connection)
                .map_err(BookRepositoryError::backend)?;
            Ok(rows.into_iter().map(row_to_book).collect())
        })
        .await
    }
}

/// An identifier that does not parse as a UUID cannot match any stored row.
fn parse_key(id: &BookId) -> Option<Uuid> {
    Uuid::parse_str(id.as_str()).ok()
}

fn row_to_book(row: BookRow) -> Book {
    let BookRow {
        id,
        title,
        author,
        edition,
        isbn,
        created_at,
        updated_at,
    } = row;

    Book::from_persisted(PersistedBook {
        id: BookId::from_raw(id.to_string()),
        title,
        author,
        edition,
        isbn,
        created_at,
        updated_at,
    })
}
