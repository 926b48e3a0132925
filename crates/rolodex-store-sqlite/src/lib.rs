//! SQLite backend for the Rolodex document store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Documents are stored as JSON text,
//! keyed by logical database name, collection, and id.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::{ConnectionConfig, SqliteStore};

#[cfg(test)]
mod tests;
