//! User documents.
//!
//! Users carry no schema of their own: any non-empty JSON object is
//! accepted and stored as-is, apart from the identifier field.

use serde_json::Value;

use crate::{
  Error, Result,
  document::{Body, ID_FIELD},
};

/// Turn a write payload into a storable user body.
///
/// The payload must be a JSON object. A client-supplied `_id` is discarded
/// (identifiers are immutable and store-assigned); what remains must have at
/// least one field.
pub fn user_body(payload: Value) -> Result<Body> {
  let Value::Object(mut body) = payload else {
    return Err(Error::NotAnObject);
  };
  body.remove(ID_FIELD);
  if body.is_empty() {
    return Err(Error::EmptyDocument);
  }
  Ok(body)
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn object_payload_is_accepted() {
    let body = user_body(json!({ "name": "ada", "admin": true })).unwrap();
    assert_eq!(body.len(), 2);
    assert_eq!(body["admin"], json!(true));
  }

  #[test]
  fn non_objects_are_rejected() {
    for payload in [json!(null), json!("ada"), json!([1, 2]), json!(3)] {
      assert_eq!(user_body(payload), Err(Error::NotAnObject));
    }
  }

  #[test]
  fn empty_objects_are_rejected() {
    assert_eq!(user_body(json!({})), Err(Error::EmptyDocument));
    assert_eq!(
      user_body(json!({ "_id": "507f1f77bcf86cd799439011" })),
      Err(Error::EmptyDocument)
    );
  }

  #[test]
  fn client_id_is_stripped() {
    let body =
      user_body(json!({ "_id": "507f1f77bcf86cd799439011", "name": "ada" }))
        .unwrap();
    assert!(!body.contains_key("_id"));
    assert_eq!(body["name"], json!("ada"));
  }
}
