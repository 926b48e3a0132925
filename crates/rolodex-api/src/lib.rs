//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any
//! [`rolodex_core::store::DocumentStore`]. TLS and transport concerns are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let state = rolodex_api::AppState::new(store);
//! axum::serve(listener, rolodex_api::api_router(state)).await?;
//! ```

pub mod contacts;
pub mod error;
pub mod extract;
pub mod handle;
pub mod users;

use axum::{Router, routing::get};
use rolodex_core::{id::DocumentId, store::DocumentStore};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use handle::{HandleError, StoreHandle};

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
pub struct AppState<S> {
  pub store: StoreHandle<S>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self {
      store: self.store.clone(),
    }
  }
}

impl<S> AppState<S> {
  /// State over an already-connected store.
  pub fn new(store: S) -> Self {
    Self {
      store: StoreHandle::new(store),
    }
  }

  /// State over an existing (possibly still empty) handle.
  pub fn with_handle(store: StoreHandle<S>) -> Self { Self { store } }
}

/// Body returned by the create endpoints.
#[derive(Debug, Serialize)]
pub struct Created {
  pub id: DocumentId,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: DocumentStore + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    // Contacts
    .route(
      "/contacts",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::replace_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    // Users
    .route("/users", get(users::list::<S>).post(users::create::<S>))
    .route(
      "/users/{id}",
      get(users::get_one::<S>)
        .put(users::replace_one::<S>)
        .delete(users::delete_one::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
