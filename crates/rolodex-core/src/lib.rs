//! Core types and trait definitions for the Rolodex document store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The storage backend and the API layer both depend on it.

pub mod contact;
pub mod document;
pub mod error;
pub mod id;
pub mod store;
pub mod user;

pub use error::{Error, Result};
