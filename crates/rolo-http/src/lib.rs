//! JSON REST API for the rolo contact service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`ContactStore`](rolo_core::store::ContactStore). The store is opened once
//! at startup and injected here; handlers hold no state of their own between
//! requests.

pub mod contacts;
pub mod error;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Json, Router,
  http::{StatusCode, Uri},
  response::IntoResponse,
  routing::get,
};
use rolo_core::store::ContactStore;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised router for `store`.
///
/// The returned `Router<()>` can be served directly or nested into a parent
/// router regardless of its own state type.
pub fn router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/api/healthcheck", get(healthcheck))
    .route(
      "/api/contacts/",
      get(contacts::list::<S>).post(contacts::create::<S>),
    )
    .route(
      "/api/contacts/{id}",
      get(contacts::get_one::<S>)
        .patch(contacts::update_one::<S>)
        .delete(contacts::delete_one::<S>),
    )
    .fallback(fallback)
    .layer(TraceLayer::new_for_http())
    .with_state(store)
}

/// `GET /api/healthcheck`
async fn healthcheck() -> impl IntoResponse {
  Json(json!({ "status": "success", "message": "the contact service is up" }))
}

/// JSON 404 naming the unmatched path.
async fn fallback(uri: Uri) -> impl IntoResponse {
  (
    StatusCode::NOT_FOUND,
    Json(json!({
      "status":  "failed",
      "message": format!("the specified route {} was not found", uri.path()),
    })),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rolo_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    router(Arc::new(store))
  }

  async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> axum::response::Response {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
  }

  async fn json_body(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  fn ada() -> Value {
    json!({
      "first_name":   "Ada",
      "last_name":    "Lovelace",
      "phone_number": "555-0100",
      "street":       "1 Analytical Ave"
    })
  }

  // ── Healthcheck ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn healthcheck_returns_200() {
    let resp = send(app().await, "GET", "/api/healthcheck", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "success");
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_returns_contact_with_generated_id() {
    let resp = send(app().await, "POST", "/api/contacts/", Some(ada())).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    let contact = &body["contact"];
    assert!(contact["id"].as_i64().unwrap() >= 1);
    assert_eq!(contact["first_name"], "Ada");
    assert_eq!(contact["last_name"], "Lovelace");
    assert_eq!(contact["phone_number"], "555-0100");
    assert_eq!(contact["street"], "1 Analytical Ave");
    assert_eq!(contact["created_at"], contact["updated_at"]);
  }

  #[tokio::test]
  async fn create_with_missing_field_returns_400() {
    let body = json!({ "first_name": "Ada" });
    let resp = send(app().await, "POST", "/api/contacts/", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "failed");
  }

  #[tokio::test]
  async fn create_with_empty_field_returns_400() {
    let mut body = ada();
    body["street"] = json!("");
    let resp = send(app().await, "POST", "/api/contacts/", Some(body)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn create_with_invalid_json_returns_400() {
    let req = Request::builder()
      .method("POST")
      .uri("/api/contacts/")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = app().await.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Get one ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_returns_created_contact() {
    let app = app().await;

    let created = json_body(
      send(app.clone(), "POST", "/api/contacts/", Some(ada())).await,
    )
    .await;
    let id = created["contact"]["id"].as_i64().unwrap();

    let resp = send(app, "GET", &format!("/api/contacts/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["contact"], created["contact"]);
  }

  #[tokio::test]
  async fn get_missing_returns_404() {
    let resp = send(app().await, "GET", "/api/contacts/42", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "failed");
  }

  #[tokio::test]
  async fn get_with_non_numeric_id_returns_400() {
    let resp = send(app().await, "GET", "/api/contacts/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Update ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn patch_updates_only_supplied_fields() {
    let app = app().await;

    let created = json_body(
      send(app.clone(), "POST", "/api/contacts/", Some(ada())).await,
    )
    .await;
    let id = created["contact"]["id"].as_i64().unwrap();

    let patch = json!({ "phone_number": "555-0200" });
    let resp = send(
      app,
      "PATCH",
      &format!("/api/contacts/{id}"),
      Some(patch),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["contact"]["phone_number"], "555-0200");
    assert_eq!(body["contact"]["first_name"], "Ada");
    assert_eq!(body["contact"]["last_name"], "Lovelace");
    assert_eq!(body["contact"]["street"], "1 Analytical Ave");
  }

  #[tokio::test]
  async fn patch_empty_strings_do_not_overwrite() {
    let app = app().await;

    let created = json_body(
      send(app.clone(), "POST", "/api/contacts/", Some(ada())).await,
    )
    .await;
    let id = created["contact"]["id"].as_i64().unwrap();

    let patch = json!({ "first_name": "", "street": "9 New Rd" });
    let resp = send(
      app,
      "PATCH",
      &format!("/api/contacts/{id}"),
      Some(patch),
    )
    .await;

    let body = json_body(resp).await;
    assert_eq!(body["contact"]["first_name"], "Ada");
    assert_eq!(body["contact"]["street"], "9 New Rd");
  }

  #[tokio::test]
  async fn patch_missing_returns_404() {
    let patch = json!({ "first_name": "Nobody" });
    let resp = send(app().await, "PATCH", "/api/contacts/42", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn patch_with_non_numeric_id_returns_400() {
    let patch = json!({ "first_name": "Nobody" });
    let resp = send(app().await, "PATCH", "/api/contacts/abc", Some(patch)).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_then_get_returns_404() {
    let app = app().await;

    let created = json_body(
      send(app.clone(), "POST", "/api/contacts/", Some(ada())).await,
    )
    .await;
    let id = created["contact"]["id"].as_i64().unwrap();

    let resp = send(app.clone(), "DELETE", &format!("/api/contacts/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = send(app, "GET", &format!("/api/contacts/{id}"), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn delete_missing_returns_404() {
    let resp = send(app().await, "DELETE", "/api/contacts/42", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn delete_with_non_numeric_id_returns_400() {
    let resp = send(app().await, "DELETE", "/api/contacts/abc", None).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  // ── List ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_empty_store_returns_empty_list() {
    let resp = send(app().await, "GET", "/api/contacts/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = json_body(resp).await;
    assert_eq!(body["size"], 0);
    assert_eq!(body["contacts"], json!([]));
  }

  async fn seed(app: &Router, count: usize) {
    for n in 0..count {
      let body = json!({
        "first_name":   format!("First{n}"),
        "last_name":    format!("Last{n}"),
        "phone_number": format!("555-{n:04}"),
        "street":       format!("{n} Example St"),
      });
      let resp = send(app.clone(), "POST", "/api/contacts/", Some(body)).await;
      assert_eq!(resp.status(), StatusCode::OK);
    }
  }

  #[tokio::test]
  async fn list_paginates_without_overlap() {
    let app = app().await;
    seed(&app, 15).await;

    let first = json_body(
      send(app.clone(), "GET", "/api/contacts/?page=1&limit=10", None).await,
    )
    .await;
    let second = json_body(
      send(app, "GET", "/api/contacts/?page=2&limit=10", None).await,
    )
    .await;

    assert_eq!(first["size"], 10);
    assert_eq!(second["size"], 5);

    let ids = |body: &Value| -> Vec<i64> {
      body["contacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect()
    };
    let mut all = ids(&first);
    all.extend(ids(&second));
    all.dedup();
    assert_eq!(all.len(), 15);
  }

  #[tokio::test]
  async fn list_with_mangled_pagination_uses_defaults() {
    let app = app().await;
    seed(&app, 12).await;

    let body = json_body(
      send(app, "GET", "/api/contacts/?page=abc&limit=xyz", None).await,
    )
    .await;
    assert_eq!(body["size"], 10);
  }

  // ── Fallback ────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn unknown_route_returns_404_naming_the_path() {
    let resp = send(app().await, "GET", "/api/nope", None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = json_body(resp).await;
    assert_eq!(body["status"], "failed");
    assert!(body["message"].as_str().unwrap().contains("/api/nope"));
  }
}
