//! Handlers for `/api/contacts` endpoints.
//!
//! | Method   | Path                 | Notes |
//! |----------|----------------------|-------|
//! | `POST`   | `/api/contacts/`     | Body: all four fields, non-empty |
//! | `GET`    | `/api/contacts/`     | Optional `?page=` (default 1) and `?limit=` (default 10) |
//! | `GET`    | `/api/contacts/{id}` | 404 if not found |
//! | `PATCH`  | `/api/contacts/{id}` | Body: any subset of the four fields |
//! | `DELETE` | `/api/contacts/{id}` | 204 on success |
//!
//! Malformed bodies and non-integer ids are 400; store failures are 502.

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::StatusCode,
};
use rolo_core::{
  contact::{Contact, ContactPatch, NewContact},
  page::Page,
  store::ContactStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// ─── Response envelopes ──────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ContactEnvelope {
  pub status:  &'static str,
  pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct ContactListEnvelope {
  pub status:   &'static str,
  pub size:     usize,
  pub contacts: Vec<Contact>,
}

fn not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("no contact with id {id}"))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /api/contacts/` — body: all four contact fields.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewContact>, JsonRejection>,
) -> Result<Json<ContactEnvelope>, ApiError>
where
  S: ContactStore,
{
  let Json(new) = body?;

  if new.first_name.is_empty()
    || new.last_name.is_empty()
    || new.phone_number.is_empty()
    || new.street.is_empty()
  {
    return Err(ApiError::BadRequest(
      "first_name, last_name, phone_number and street must all be non-empty".into(),
    ));
  }

  let contact = store
    .create(new)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(ContactEnvelope { status: "successfully created contact", contact }))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// Raw query values; parsing is best-effort so a mangled `page` or `limit`
/// never rejects the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
  pub page:  Option<String>,
  pub limit: Option<String>,
}

/// `GET /api/contacts/[?page=N][&limit=N]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<ContactListEnvelope>, ApiError>
where
  S: ContactStore,
{
  let page = Page::from_raw(params.page.as_deref(), params.limit.as_deref());

  let contacts = store
    .list(page)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(ContactListEnvelope {
    status:   "successfully retrieved contacts",
    size:     contacts.len(),
    contacts,
  }))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /api/contacts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ContactEnvelope>, ApiError>
where
  S: ContactStore,
{
  let Path(id) = id?;

  let contact = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(ContactEnvelope { status: "successfully retrieved contact", contact }))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PATCH /api/contacts/{id}` — body: any subset of the four contact fields.
/// Absent and empty fields are left unchanged; `updated_at` refreshes either
/// way.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
  body: Result<Json<ContactPatch>, JsonRejection>,
) -> Result<Json<ContactEnvelope>, ApiError>
where
  S: ContactStore,
{
  let Path(id) = id?;
  let Json(patch) = body?;

  let contact = store
    .update(id, patch)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(ContactEnvelope { status: "successfully updated contact", contact }))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /api/contacts/{id}` — 204 with no body on success.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
  S: ContactStore,
{
  let Path(id) = id?;

  // Existence check first, so deleting nothing is a 404 rather than a
  // silently successful no-op.
  store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;

  store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok(StatusCode::NO_CONTENT)
}
