//! Stored documents and the collections that hold them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::id::DocumentId;

/// Field under which a document's identifier is exposed.
pub const ID_FIELD: &str = "_id";

/// JSON object body of a document, without its identifier.
pub type Body = Map<String, Value>;

/// A named grouping of documents of one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
  Contacts,
  Users,
}

impl Collection {
  pub fn as_str(self) -> &'static str {
    match self {
      Collection::Contacts => "contacts",
      Collection::Users => "users",
    }
  }
}

/// A single stored record: identifier plus JSON body.
///
/// Serialises flat, with the identifier under `_id`:
/// `{"_id":"507f1f77bcf86cd799439011","firstName":"Ada",...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
  #[serde(rename = "_id")]
  pub id:   DocumentId,
  #[serde(flatten)]
  pub body: Body,
}
