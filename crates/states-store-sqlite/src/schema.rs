//! SQL schema for the SQLite fun-fact store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- One row per state; at most one record ever exists per code.
CREATE TABLE IF NOT EXISTS funfacts (
    state_code  TEXT PRIMARY KEY,  -- canonical uppercase abbreviation
    funfacts    TEXT NOT NULL      -- JSON array of strings, insertion order
);

PRAGMA user_version = 1;
";
