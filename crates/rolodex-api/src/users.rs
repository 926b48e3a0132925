//! Handlers for `/users` endpoints.
//!
//! Same five operations as `/contacts`, over schema-less documents: writes
//! accept any non-empty JSON object, minus a client-supplied `_id`.

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use rolodex_core::{
  document::{Collection, Document},
  store::DocumentStore,
  user::user_body,
};

use crate::{AppState, Created, error::ApiError, extract::{DocId, Payload}};

const NOT_FOUND: &str = "user not found";

/// `GET /users`
pub async fn list<S>(
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Document>>, ApiError>
where
  S: DocumentStore,
{
  let users = state
    .store
    .get()?
    .find_all(Collection::Users)
    .await
    .map_err(ApiError::store("could not fetch users"))?;
  Ok(Json(users))
}

/// `GET /users/{id}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  DocId(id): DocId,
) -> Result<Json<Document>, ApiError>
where
  S: DocumentStore,
{
  let user = state
    .store
    .get()?
    .find_one(Collection::Users, id)
    .await
    .map_err(ApiError::store("could not fetch user"))?
    .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_owned()))?;
  Ok(Json(user))
}

/// `POST /users`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Payload(payload): Payload,
) -> Result<impl IntoResponse, ApiError>
where
  S: DocumentStore,
{
  let user = user_body(payload)?;
  let id = state
    .store
    .get()?
    .insert_one(Collection::Users, user)
    .await
    .map_err(ApiError::store("could not create user"))?;
  tracing::info!(%id, "user created");
  Ok((StatusCode::CREATED, Json(Created { id })))
}

/// `PUT /users/{id}`
///
/// 404 is keyed on the matched count, so an identical replacement is a 204.
/// Known divergence: the earlier service answered 404 whenever the driver
/// reported zero documents modified.
pub async fn replace_one<S>(
  State(state): State<AppState<S>>,
  DocId(id): DocId,
  Payload(payload): Payload,
) -> Result<StatusCode, ApiError>
where
  S: DocumentStore,
{
  let user = user_body(payload)?;
  let matched = state
    .store
    .get()?
    .replace_one(Collection::Users, id, user)
    .await
    .map_err(ApiError::store("could not update user"))?;
  if matched == 0 {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /users/{id}`
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
    .delete_one(Collection::Users, id)
    .await
    .map_err(ApiError::store("could not delete user"))?;
  if deleted == 0 {
    return Err(ApiError::NotFound(NOT_FOUND.to_owned()));
  }
  tracing::info!(%id, "user deleted");
  Ok(StatusCode::NO_CONTENT)
}
