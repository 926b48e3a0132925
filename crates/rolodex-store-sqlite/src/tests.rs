//! Integration tests for `SqliteStore` against an in-memory database.

use rolodex_core::{
  document::{Body, Collection},
  id::DocumentId,
  store::DocumentStore,
};
use serde_json::{Value, json};

use crate::{ConnectionConfig, Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn body(value: Value) -> Body {
  match value {
    Value::Object(map) => map,
    other => panic!("not an object: {other}"),
  }
}

fn ada() -> Body {
  body(json!({
    "firstName":     "Ada",
    "lastName":      "Lovelace",
    "email":         "ada@example.com",
    "favoriteColor": "green",
    "birthday":      "1815-12-10",
  }))
}

fn unknown_id() -> DocumentId {
  DocumentId::parse("000000000000000000000000").unwrap()
}

// ─── Insert / find ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_one() {
  let s = store().await;

  let id = s.insert_one(Collection::Contacts, ada()).await.unwrap();
  let doc = s.find_one(Collection::Contacts, id).await.unwrap().unwrap();

  assert_eq!(doc.id, id);
  assert_eq!(doc.body, ada());
}

#[tokio::test]
async fn find_one_missing_returns_none() {
  let s = store().await;
  let result = s.find_one(Collection::Contacts, unknown_id()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn find_all_empty_collection() {
  let s = store().await;
  let all = s.find_all(Collection::Contacts).await.unwrap();
  assert!(all.is_empty());
}

#[tokio::test]
async fn find_all_preserves_insertion_order() {
  let s = store().await;
  let mut ids = Vec::new();
  for n in 0..5 {
    let id = s
      .insert_one(Collection::Users, body(json!({ "n": n })))
      .await
      .unwrap();
    ids.push(id);
  }

  let all = s.find_all(Collection::Users).await.unwrap();
  let found: Vec<DocumentId> = all.iter().map(|d| d.id).collect();
  assert_eq!(found, ids);
  assert_eq!(all[3].body["n"], json!(3));
}

#[tokio::test]
async fn collections_are_disjoint() {
  let s = store().await;
  let id = s.insert_one(Collection::Contacts, ada()).await.unwrap();

  assert!(s.find_all(Collection::Users).await.unwrap().is_empty());
  assert!(s.find_one(Collection::Users, id).await.unwrap().is_none());
  assert_eq!(s.delete_one(Collection::Users, id).await.unwrap(), 0);
  assert_eq!(s.find_all(Collection::Contacts).await.unwrap().len(), 1);
}

#[tokio::test]
async fn repeated_reads_are_identical() {
  let s = store().await;
  s.insert_one(Collection::Contacts, ada()).await.unwrap();

  let first = s.find_all(Collection::Contacts).await.unwrap();
  let second = s.find_all(Collection::Contacts).await.unwrap();
  assert_eq!(first, second);
}

// ─── Replace ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn replace_existing_document() {
  let s = store().await;
  let id = s.insert_one(Collection::Contacts, ada()).await.unwrap();

  let mut updated = ada();
  updated.insert("favoriteColor".into(), json!("purple"));
  let matched = s
    .replace_one(Collection::Contacts, id, updated.clone())
    .await
    .unwrap();
  assert_eq!(matched, 1);

  let doc = s.find_one(Collection::Contacts, id).await.unwrap().unwrap();
  assert_eq!(doc.id, id);
  assert_eq!(doc.body, updated);
}

#[tokio::test]
async fn replace_is_a_full_replacement() {
  let s = store().await;
  let id = s
    .insert_one(Collection::Users, body(json!({ "a": 1, "b": 2 })))
    .await
    .unwrap();

  s.replace_one(Collection::Users, id, body(json!({ "c": 3 })))
    .await
    .unwrap();

  let doc = s.find_one(Collection::Users, id).await.unwrap().unwrap();
  assert_eq!(doc.body, body(json!({ "c": 3 })));
}

#[tokio::test]
async fn replace_with_identical_body_still_matches() {
  let s = store().await;
  let id = s.insert_one(Collection::Contacts, ada()).await.unwrap();

  let matched = s.replace_one(Collection::Contacts, id, ada()).await.unwrap();
  assert_eq!(matched, 1);
  let doc = s.find_one(Collection::Contacts, id).await.unwrap().unwrap();
  assert_eq!(doc.body, ada());
}

#[tokio::test]
async fn replace_missing_matches_nothing() {
  let s = store().await;
  let matched = s
    .replace_one(Collection::Contacts, unknown_id(), ada())
    .await
    .unwrap();
  assert_eq!(matched, 0);
  assert!(s.find_all(Collection::Contacts).await.unwrap().is_empty());
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_removes_document() {
  let s = store().await;
  let id = s.insert_one(Collection::Contacts, ada()).await.unwrap();

  assert_eq!(s.delete_one(Collection::Contacts, id).await.unwrap(), 1);
  assert!(s.find_one(Collection::Contacts, id).await.unwrap().is_none());
  assert_eq!(s.delete_one(Collection::Contacts, id).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_missing_returns_zero() {
  let s = store().await;
  let deleted = s.delete_one(Collection::Contacts, unknown_id()).await.unwrap();
  assert_eq!(deleted, 0);
}

// ─── Connection ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn logical_databases_are_isolated() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("rolodex.db");

  let a = SqliteStore::connect(&ConnectionConfig {
    path:     path.clone(),
    database: "alpha".into(),
  })
  .await
  .unwrap();
  let b = SqliteStore::connect(&ConnectionConfig {
    path:     path.clone(),
    database: "beta".into(),
  })
  .await
  .unwrap();

  let id = a.insert_one(Collection::Contacts, ada()).await.unwrap();

  assert!(b.find_all(Collection::Contacts).await.unwrap().is_empty());
  assert!(b.find_one(Collection::Contacts, id).await.unwrap().is_none());
  assert_eq!(a.find_all(Collection::Contacts).await.unwrap().len(), 1);
}

#[tokio::test]
async fn documents_survive_reconnect() {
  let dir = tempfile::tempdir().unwrap();
  let config = ConnectionConfig {
    path:     dir.path().join("rolodex.db"),
    database: "contacts".into(),
  };

  let id = {
    let s = SqliteStore::connect(&config).await.unwrap();
    s.insert_one(Collection::Contacts, ada()).await.unwrap()
  };

  let s = SqliteStore::connect(&config).await.unwrap();
  let doc = s.find_one(Collection::Contacts, id).await.unwrap().unwrap();
  assert_eq!(doc.body, ada());
}

#[tokio::test]
async fn empty_database_name_is_rejected() {
  let result = SqliteStore::connect(&ConnectionConfig {
    path:     ":memory:".into(),
    database: String::new(),
  })
  .await;
  assert!(matches!(result, Err(Error::EmptyDatabaseName)));
}

#[tokio::test]
async fn unopenable_path_fails() {
  let dir = tempfile::tempdir().unwrap();
  let result = SqliteStore::connect(&ConnectionConfig {
    path:     dir.path().join("missing").join("rolodex.db"),
    database: "contacts".into(),
  })
  .await;
  assert!(matches!(result, Err(Error::Database(_))));
}
