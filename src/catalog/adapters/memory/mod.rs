//! In-memory adapters for catalog persistence.

mod book_store;

pub use book_store::InMemoryBookRepository;
