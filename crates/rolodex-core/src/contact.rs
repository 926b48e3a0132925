//! Contact records and their completeness check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result, document::Body};

/// Fields every stored contact must carry, in wire spelling.
pub const REQUIRED_FIELDS: [&str; 5] =
  ["firstName", "lastName", "email", "favoriteColor", "birthday"];

/// A person's contact details. Every field is a non-empty string.
///
/// `email` and `birthday` are opaque; no format checks are applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  pub first_name:     String,
  pub last_name:      String,
  pub email:          String,
  pub favorite_color: String,
  pub birthday:       String,
}

/// A required field counts as present only if it holds a non-empty string.
/// Absent keys, `null`, `""` and non-string values are all missing.
fn present<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
  payload
    .get(field)
    .and_then(Value::as_str)
    .filter(|s| !s.is_empty())
}

/// Required fields that are missing from `payload`, in declaration order.
pub fn missing_fields(payload: &Value) -> Vec<&'static str> {
  REQUIRED_FIELDS
    .into_iter()
    .filter(|f| present(payload, f).is_none())
    .collect()
}

/// Returns `true` iff all five required fields are present and non-empty.
pub fn is_complete_contact(payload: &Value) -> bool {
  missing_fields(payload).is_empty()
}

impl Contact {
  /// Extract a contact from an arbitrary JSON payload.
  ///
  /// Unknown keys are dropped. Fails with [`Error::IncompleteContact`]
  /// naming every missing field.
  pub fn from_payload(payload: &Value) -> Result<Self> {
    let missing = missing_fields(payload);
    if !missing.is_empty() {
      return Err(Error::IncompleteContact(missing));
    }
    let field = |name| present(payload, name).unwrap_or_default().to_owned();
    Ok(Self {
      first_name:     field("firstName"),
      last_name:      field("lastName"),
      email:          field("email"),
      favorite_color: field("favoriteColor"),
      birthday:       field("birthday"),
    })
  }

  /// The document body this contact is stored as.
  pub fn into_body(self) -> Body {
    match serde_json::to_value(self) {
      Ok(Value::Object(map)) => map,
      _ => Body::new(),
    }
  }
}
