//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{BytesRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::handle::HandleError;

/// An error returned by an API handler.
///
/// Every variant renders as `{"error": "<message>"}`. Server-side failures
/// are logged here and never echo their source to the client.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("payload too large: {0}")]
  PayloadTooLarge(String),

  #[error("{context}: {source}")]
  Store {
    /// Client-facing description of the operation that failed.
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },

  #[error(transparent)]
  Handle(#[from] HandleError),
}

impl ApiError {
  /// Adapter for `map_err` on store calls:
  /// `.map_err(ApiError::store("could not fetch contacts"))`.
  pub fn store<E>(context: &'static str) -> impl FnOnce(E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    move |e| ApiError::Store {
      context,
      source: Box::new(e),
    }
  }
}

impl From<rolodex_core::Error> for ApiError {
  fn from(e: rolodex_core::Error) -> Self { ApiError::BadRequest(e.to_string()) }
}

/// A path segment axum could not decode, e.g. one that is not valid UTF-8.
impl From<PathRejection> for ApiError {
  fn from(e: PathRejection) -> Self { ApiError::BadRequest(e.body_text()) }
}

/// A body that could not be buffered. Over-limit bodies keep their 413.
impl From<BytesRejection> for ApiError {
  fn from(e: BytesRejection) -> Self {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
      ApiError::PayloadTooLarge(e.body_text())
    } else {
      ApiError::BadRequest(e.body_text())
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => {
        tracing::debug!(reason = %m, "rejected request");
        (StatusCode::BAD_REQUEST, m.clone())
      }
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::PayloadTooLarge(m) => (StatusCode::PAYLOAD_TOO_LARGE, m.clone()),
      ApiError::Store { context, source } => {
        tracing::error!(error = %source, "{context}");
        (StatusCode::INTERNAL_SERVER_ERROR, (*context).to_owned())
      }
      ApiError::Handle(e) => {
        tracing::error!(error = %e, "store handle unavailable");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "database unavailable".to_owned(),
        )
      }
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
