//! [`SqliteStore`] — the SQLite implementation of [`DocumentStore`].

use std::path::PathBuf;

use rusqlite::OptionalExtension as _;

use rolodex_core::{
  document::{Body, Collection, Document},
  id::DocumentId,
  store::DocumentStore,
};

use crate::{
  encode::{RawDocument, encode_body, encode_id},
  schema::SCHEMA,
  Error, Result,
};

// ─── Connection config ───────────────────────────────────────────────────────

/// Where to connect and which logical database to select.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
  /// SQLite file path; `:memory:` opens a private scratch database.
  pub path:     PathBuf,
  /// Logical database name. Stores opened with different names on the same
  /// file never see each other's documents.
  pub database: String,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A document store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn:     tokio_rusqlite::Connection,
  database: String,
}

impl SqliteStore {
  /// Open (or create) the store described by `config` and run schema
  /// initialisation. Nothing is retried; a failure here is final.
  pub async fn connect(config: &ConnectionConfig) -> Result<Self> {
    if config.database.is_empty() {
      return Err(Error::EmptyDatabaseName);
    }
    let conn = tokio_rusqlite::Connection::open(&config.path).await?;
    let store = Self {
      conn,
      database: config.database.clone(),
    };
    store.init_schema().await?;
    tracing::debug!(
      path = %config.path.display(),
      database = %store.database,
      "sqlite store opened"
    );
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self {
      conn,
      database: "test".to_owned(),
    };
    store.init_schema().await?;
    Ok(store)
  }

  /// The logical database this store reads and writes.
  pub fn database(&self) -> &str { &self.database }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── DocumentStore impl ──────────────────────────────────────────────────────

impl DocumentStore for SqliteStore {
  type Error = Error;

  async fn find_all(&self, collection: Collection) -> Result<Vec<Document>> {
    let db = self.database.clone();
    let coll = collection.as_str();

    let raws: Vec<RawDocument> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, body FROM documents
           WHERE db_name = ?1 AND collection = ?2
           ORDER BY rowid",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![db, coll], |row| {
            Ok(RawDocument {
              id:   row.get(0)?,
              body: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(|raw| raw.into_document(coll)).collect()
  }

  async fn find_one(
    &self,
    collection: Collection,
    id: DocumentId,
  ) -> Result<Option<Document>> {
    let db = self.database.clone();
    let coll = collection.as_str();
    let id_str = encode_id(id);

    let raw: Option<RawDocument> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, body FROM documents
             WHERE db_name = ?1 AND collection = ?2 AND id = ?3",
            rusqlite::params![db, coll, id_str],
            |row| {
              Ok(RawDocument {
                id:   row.get(0)?,
                body: row.get(1)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(|r| r.into_document(coll)).transpose()
  }

  async fn insert_one(
    &self,
    collection: Collection,
    body: Body,
  ) -> Result<DocumentId> {
    let id = DocumentId::generate();
    let db = self.database.clone();
    let coll = collection.as_str();
    let id_str = encode_id(id);
    let body_str = encode_body(&body)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO documents (db_name, collection, id, body)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![db, coll, id_str, body_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(id)
  }

  async fn replace_one(
    &self,
    collection: Collection,
    id: DocumentId,
    body: Body,
  ) -> Result<u64> {
    let db = self.database.clone();
    let coll = collection.as_str();
    let id_str = encode_id(id);
    let body_str = encode_body(&body)?;

    // SQLite counts every row the WHERE clause matched, changed or not.
    let matched = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE documents SET body = ?4
           WHERE db_name = ?1 AND collection = ?2 AND id = ?3",
          rusqlite::params![db, coll, id_str, body_str],
        )?)
      })
      .await?;

    Ok(matched as u64)
  }

  async fn delete_one(&self, collection: Collection, id: DocumentId) -> Result<u64> {
    let db = self.database.clone();
    let coll = collection.as_str();
    let id_str = encode_id(id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM documents
           WHERE db_name = ?1 AND collection = ?2 AND id = ?3",
          rusqlite::params![db, coll, id_str],
        )?)
      })
      .await?;

    Ok(deleted as u64)
  }
}
