//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::{JsonRejection, PathRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// `Store` covers every persistence failure and maps to 502 Bad Gateway with
/// the underlying message passed through; absence is `NotFound`, never
/// `Store`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self {
    ApiError::BadRequest(rejection.body_text())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(m) => (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "failed", "message": m })),
      )
        .into_response(),
      ApiError::BadRequest(m) => (
        StatusCode::BAD_REQUEST,
        Json(json!({ "status": "failed", "error": m })),
      )
        .into_response(),
      ApiError::Store(e) => (
        StatusCode::BAD_GATEWAY,
        Json(json!({ "status": "failed", "error": e.to_string() })),
      )
        .into_response(),
    }
  }
}
