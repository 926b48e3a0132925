//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Ids are stored as lowercase hex. Bodies are stored as compact JSON.

use rolodex_core::{
  document::{Body, Document},
  id::DocumentId,
};
use serde_json::Value;

use crate::{Error, Result};

pub fn encode_id(id: DocumentId) -> String { id.to_hex() }

pub fn encode_body(body: &Body) -> Result<String> {
  Ok(serde_json::to_string(body)?)
}

/// Raw row data from `documents`.
pub struct RawDocument {
  pub id:   String,
  pub body: String,
}

impl RawDocument {
  pub fn into_document(self, collection: &str) -> Result<Document> {
    let id = DocumentId::parse(&self.id)?;
    match serde_json::from_str::<Value>(&self.body)? {
      Value::Object(body) => Ok(Document { id, body }),
      _ => Err(Error::CorruptDocument {
        collection: collection.to_owned(),
        id:         self.id,
      }),
    }
  }
}
