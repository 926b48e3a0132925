//! Request extractors shared by the handlers.
//!
//! Both reject with [`ApiError`], so a bad path segment or an unreadable
//! body renders as `{"error": ...}` like every other failure, instead of
//! axum's plain-text rejections.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use bytes::Bytes;
use rolodex_core::id::DocumentId;
use serde_json::Value;

use crate::error::ApiError;

/// The `{id}` path segment, already validated.
///
/// Runs before any body extractor, so a malformed id is reported even when
/// the body is also bad.
#[derive(Debug, Clone, Copy)]
pub struct DocId(pub DocumentId);

impl<S> FromRequestParts<S> for DocId
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &S,
  ) -> Result<Self, Self::Rejection> {
    let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
    Ok(Self(DocumentId::parse(&raw)?))
  }
}

/// The request body decoded as JSON.
///
/// Bodies are buffered as raw bytes rather than through `axum::Json`, so a
/// missing `Content-Type` does not turn into a 415. An empty body decodes
/// to `null`, which every validator then rejects.
#[derive(Debug, Clone)]
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let bytes = Bytes::from_request(req, state).await?;
    decode_json(&bytes).map(Self)
  }
}

fn decode_json(bytes: &Bytes) -> Result<Value, ApiError> {
  if bytes.iter().all(u8::is_ascii_whitespace) {
    return Ok(Value::Null);
  }
  serde_json::from_slice(bytes)
    .map_err(|e| ApiError::BadRequest(format!("malformed JSON body: {e}")))
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn empty_body_is_null() {
    assert_eq!(decode_json(&Bytes::new()).unwrap(), Value::Null);
    assert_eq!(decode_json(&Bytes::from_static(b" \n")).unwrap(), Value::Null);
  }

  #[test]
  fn object_body_decodes() {
    let v = decode_json(&Bytes::from_static(br#"{"a":1}"#)).unwrap();
    assert_eq!(v, json!({ "a": 1 }));
  }

  #[test]
  fn garbage_is_bad_request() {
    let err = decode_json(&Bytes::from_static(b"{nope")).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
  }
}
