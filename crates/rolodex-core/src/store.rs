//! The `DocumentStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rolodex-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  document::{Body, Collection, Document},
  id::DocumentId,
};

/// Abstraction over a document store backend.
///
/// Every method is a single atomic storage operation. Implementations own
/// identifier allocation; callers never choose an id.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait DocumentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All documents in `collection`, in insertion order.
  fn find_all(
    &self,
    collection: Collection,
  ) -> impl Future<Output = Result<Vec<Document>, Self::Error>> + Send + '_;

  /// The document with `id`, or `None`.
  fn find_one(
    &self,
    collection: Collection,
    id: DocumentId,
  ) -> impl Future<Output = Result<Option<Document>, Self::Error>> + Send + '_;

  /// Store `body` under a freshly allocated id and return that id.
  fn insert_one(
    &self,
    collection: Collection,
    body: Body,
  ) -> impl Future<Output = Result<DocumentId, Self::Error>> + Send + '_;

  /// Replace the whole body of `id`; returns the number of documents whose
  /// id matched (0 or 1), whether or not the body changed. The id itself
  /// never changes.
  fn replace_one(
    &self,
    collection: Collection,
    id: DocumentId,
    body: Body,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Remove `id`; returns the number of documents deleted (0 or 1).
  fn delete_one(
    &self,
    collection: Collection,
    id: DocumentId,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
