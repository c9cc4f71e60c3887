//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rolo-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.
//!
//! Absence is typed: lookups return `Ok(None)` and deletes return
//! `Ok(false)` when no row matches, so callers never have to tell "no such
//! contact" apart from an operational failure by inspecting messages.

use std::future::Future;

use crate::{
  contact::{Contact, ContactPatch, NewContact},
  page::Page,
};

/// Abstraction over a contact store backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new contact and return the persisted record with its generated
  /// id. `created_at` and `updated_at` are set by the store to the same
  /// instant.
  fn create(
    &self,
    new: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// List up to `page.limit` contacts starting at `page.offset`, ordered by
  /// id ascending.
  fn list(
    &self,
    page: Page,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Overwrite the fields set in `patch` and refresh `updated_at`.
  ///
  /// Returns the updated contact, or `None` if no row matched. The write and
  /// the read-back happen atomically with respect to other store calls.
  fn update(
    &self,
    id: i64,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Delete a contact by id. Returns `true` if a row was deleted.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
