//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path             | Notes |
//! |----------|------------------|-------|
//! | `GET`    | `/contacts`      | All contacts, possibly `[]` |
//! | `GET`    | `/contacts/{id}` | 400 on a malformed id, 404 if absent |
//! | `POST`   | `/contacts`      | Body: [`Contact`]; returns 201 + `{"id": ...}` |
//! | `PUT`    | `/contacts/{id}` | Body: [`Contact`]; full replacement, 204 |
//! | `DELETE` | `/contacts/{id}` | 204, or 404 if nothing was deleted |
//!
//! The id is validated before the body, and both before the store is
//! touched.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use rolodex_core::{
  contact::Contact,
  document::{Collection, Document},
  store::DocumentStore,
};

use crate::{AppState, Created, error::ApiError, extract::{DocId, Payload}};

const NOT_FOUND: &str = "contact not found";

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Document>>, ApiError>
where
  S: DocumentStore,
{
  let contacts = state
    .store
    .get()?
    .find_all(Collection::Contacts)
    .await
    .map_err(ApiError::store("could not fetch contacts"))?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  DocId(id): DocId,
) -> Result<Json<Document>, ApiError>
where
  S: DocumentStore,
{
  let contact = state
    .store
    .get()?
    .find_one(Collection::Contacts, id)
    .await
    .map_err(ApiError::store("could not fetch contact"))?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts` — returns 201 + `{"id": "<24-hex>"}`.
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Payload(payload): Payload,
) -> Result<impl IntoResponse, ApiError>
where
  S: DocumentStore,
{
  let contact = Contact::from_payload(&payload)?;
  let id = state
    .store
    .get()?
    .insert_one(Collection::Contacts, contact.into_body())
    .await
    .map_err(ApiError::store("could not create contact"))?;
  tracing::info!(%id, "contact created");
  Ok((StatusCode::CREATED, Json(Created { id })))
}

// ─── Replace ──────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}` — every field is required again; 204 on success.
///
/// 404 is keyed on the matched count: replacing a contact with identical
/// content returns 204. This is a known divergence from the earlier service,
/// which answered 404 whenever the driver reported zero documents modified.
pub async fn replace_one<S>(
  State(state): State<AppState<S>>,
  DocId(id): DocId,
  Payload(payload): Payload,
) -> Result<StatusCode, ApiError>
where
  S: DocumentStore,
{
  let contact = Contact::from_payload(&payload)?;
  let matched = state
    .store
    .get()?
    .replace_one(Collection::Contacts, id, contact.into_body())
    .await
    .map_err(ApiError::store("could not update contact"))?;
  if matched == 0 {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  Ok(StatusCode::NO_CONTENT)
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`
pub async fn delete_one<S>(
  State(state): State<AppState<S>>,
  DocId(id): DocId,
) -> Result<StatusCode, ApiError>
where
  S: DocumentStore,
{
  let deleted = state
    .store
    .get()?
    .delete_one(Collection::Contacts, id)
    .await
    .map_err(ApiError::store("could not delete contact"))?;
  if deleted == 0 {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  tracing::info!(%id, "contact deleted");
  Ok(StatusCode::NO_CONTENT)
}
