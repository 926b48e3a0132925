//! Error type for `rolodex-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] rolodex_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// A row's `body` column did not decode to a JSON object.
  #[error("stored document {id} in {collection} is not a JSON object")]
  CorruptDocument { collection: String, id: String },

  #[error("logical database name must not be empty")]
  EmptyDatabaseName,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
