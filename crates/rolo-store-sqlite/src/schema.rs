//! SQL schema for the rolo SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    contact_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name   TEXT NOT NULL,
    last_name    TEXT NOT NULL,
    phone_number TEXT NOT NULL,
    street       TEXT NOT NULL,
    created_at   TEXT NOT NULL,   -- ISO 8601 UTC; store-assigned, immutable
    updated_at   TEXT NOT NULL    -- refreshed on every successful update
);

PRAGMA user_version = 1;
";
