//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; every other column is plain
//! text or an integer rowid.

use chrono::{DateTime, Utc};
use rolo_core::contact::Contact;

use crate::{Error, Result};

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw values read directly from a `contacts` row.
pub struct RawContact {
  pub contact_id:   i64,
  pub first_name:   String,
  pub last_name:    String,
  pub phone_number: String,
  pub street:       String,
  pub created_at:   String,
  pub updated_at:   String,
}

impl RawContact {
  /// Row mapper for `query_row`/`query_map` over the canonical column order
  /// (`contact_id, first_name, last_name, phone_number, street, created_at,
  /// updated_at`).
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawContact {
      contact_id:   row.get(0)?,
      first_name:   row.get(1)?,
      last_name:    row.get(2)?,
      phone_number: row.get(3)?,
      street:       row.get(4)?,
      created_at:   row.get(5)?,
      updated_at:   row.get(6)?,
    })
  }

  pub fn into_contact(self) -> Result<Contact> {
    Ok(Contact {
      id:           self.contact_id,
      first_name:   self.first_name,
      last_name:    self.last_name,
      phone_number: self.phone_number,
      street:       self.street,
      created_at:   decode_dt(&self.created_at)?,
      updated_at:   decode_dt(&self.updated_at)?,
    })
  }
}
