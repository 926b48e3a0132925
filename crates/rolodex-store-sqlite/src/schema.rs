//! SQL schema for the Rolodex SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// One table holds every collection of every logical database. Insertion
/// order is the implicit `rowid`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS documents (
    db_name     TEXT NOT NULL,
    collection  TEXT NOT NULL,   -- 'contacts' | 'users'
    id          TEXT NOT NULL,   -- 24 lowercase hex chars; server-assigned
    body        TEXT NOT NULL,   -- JSON object, without the id
    PRIMARY KEY (db_name, collection, id)
);

PRAGMA user_version = 1;
";
