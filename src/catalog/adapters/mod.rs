//! Adapter implementations of the catalog repository port.
//!
//! Two conforming backends exist: an in-process concurrent map in
//! [`memory`] and a durable transactional `PostgreSQL` store in
//! [`postgres`]. Either one satisfies the same port contract; selection
//! happens at startup via [`crate::catalog::config`].

pub mod memory;
pub mod postgres;
