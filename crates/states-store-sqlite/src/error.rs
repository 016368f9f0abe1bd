//! Error type for `states-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// A record already exists for a code passed to `create`.
  #[error("record already exists for state {0}")]
  DuplicateCode(String),

  /// `save` was called with a record that was never created.
  #[error("no record to save for state {0}")]
  MissingRecord(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
