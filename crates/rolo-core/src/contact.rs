//! Contact — the persisted entity and its write-side shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted contact record.
///
/// `id` is assigned by the store and immutable. `created_at` is set once at
/// insertion; `updated_at` is refreshed on every successful update, so
/// `updated_at >= created_at` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
  pub id:           i64,
  pub first_name:   String,
  pub last_name:    String,
  pub phone_number: String,
  pub street:       String,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
}

/// Input for [`create`](crate::store::ContactStore::create).
/// All four fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
  pub first_name:   String,
  pub last_name:    String,
  pub phone_number: String,
  pub street:       String,
}

/// Partial update for [`update`](crate::store::ContactStore::update).
///
/// `None` and `Some("")` both mean "leave unchanged". Each field overwrites
/// only its own column; an update with every field unset still refreshes the
/// contact's `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPatch {
  pub first_name:   Option<String>,
  pub last_name:    Option<String>,
  pub phone_number: Option<String>,
  pub street:       Option<String>,
}

impl ContactPatch {
  /// Collapse empty-string fields to `None` so stores only ever see real
  /// overwrites.
  pub fn normalize(self) -> Self {
    fn keep(field: Option<String>) -> Option<String> {
      field.filter(|s| !s.is_empty())
    }

    ContactPatch {
      first_name:   keep(self.first_name),
      last_name:    keep(self.last_name),
      phone_number: keep(self.phone_number),
      street:       keep(self.street),
    }
  }
}
