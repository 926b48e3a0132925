//! Error types for `rolodex-core`.

use thiserror::Error;

/// A payload or identifier was rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("invalid id format: {0:?}")]
  InvalidId(String),

  #[error("all fields are required (missing: {})", .0.join(", "))]
  IncompleteContact(Vec<&'static str>),

  #[error("document body must be a JSON object")]
  NotAnObject,

  #[error("document body must not be empty")]
  EmptyDocument,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
