//! [`SqliteStore`] — the SQLite implementation of [`ContactStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use rolo_core::{
  contact::{Contact, ContactPatch, NewContact},
  page::Page,
  store::ContactStore,
};

use crate::{
  encode::{RawContact, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ContactStore impl ───────────────────────────────────────────────────────

impl ContactStore for SqliteStore {
  type Error = Error;

  async fn create(&self, new: NewContact) -> Result<Contact> {
    let now    = Utc::now();
    let at_str = encode_dt(now);
    let row    = new.clone();

    let id: i64 = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO contacts (
             first_name, last_name, phone_number, street, created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.phone_number,
            row.street,
            at_str,
            at_str,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(Contact {
      id,
      first_name:   new.first_name,
      last_name:    new.last_name,
      phone_number: new.phone_number,
      street:       new.street,
      created_at:   now,
      updated_at:   now,
    })
  }

  async fn get(&self, id: i64) -> Result<Option<Contact>> {
    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT contact_id, first_name, last_name, phone_number, street,
                      created_at, updated_at
               FROM contacts WHERE contact_id = ?1",
              rusqlite::params![id],
              RawContact::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn list(&self, page: Page) -> Result<Vec<Contact>> {
    let Page { limit, offset } = page;

    let raws: Vec<RawContact> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT contact_id, first_name, last_name, phone_number, street,
                  created_at, updated_at
           FROM contacts
           ORDER BY contact_id ASC
           LIMIT ?1 OFFSET ?2",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit, offset], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::into_contact).collect()
  }

  async fn update(&self, id: i64, patch: ContactPatch) -> Result<Option<Contact>> {
    // Empty-string fields mean "leave unchanged"; collapse them before they
    // reach the SQL layer.
    let patch  = patch.normalize();
    let at_str = encode_dt(Utc::now());

    let raw: Option<RawContact> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let changed = tx.execute(
          "UPDATE contacts SET
             first_name   = COALESCE(?2, first_name),
             last_name    = COALESCE(?3, last_name),
             phone_number = COALESCE(?4, phone_number),
             street       = COALESCE(?5, street),
             updated_at   = ?6
           WHERE contact_id = ?1",
          rusqlite::params![
            id,
            patch.first_name,
            patch.last_name,
            patch.phone_number,
            patch.street,
            at_str,
          ],
        )?;

        if changed == 0 {
          return Ok(None);
        }

        let raw = tx.query_row(
          "SELECT contact_id, first_name, last_name, phone_number, street,
                  created_at, updated_at
           FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id],
          RawContact::from_row,
        )?;

        tx.commit()?;
        Ok(Some(raw))
      })
      .await?;

    raw.map(RawContact::into_contact).transpose()
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(changed > 0)
  }
}
