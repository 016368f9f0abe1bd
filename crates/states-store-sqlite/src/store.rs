//! [`SqliteStore`] — the SQLite implementation of [`FunFactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use states_core::{funfact::FunFactRecord, store::FunFactStore};

use crate::{Error, Result, schema::SCHEMA};

/// A fun-fact store backed by a single SQLite file.
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

  fn decode(state_code: String, funfacts_json: String) -> Result<FunFactRecord> {
    let funfacts: Vec<String> = serde_json::from_str(&funfacts_json)?;
    Ok(FunFactRecord { state_code, funfacts })
  }
}

impl FunFactStore for SqliteStore {
  type Error = Error;

  async fn find_by_code(&self, code: &str) -> Result<Option<FunFactRecord>> {
    let code_owned = code.to_owned();

    let row: Option<(String, String)> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT state_code, funfacts FROM funfacts WHERE state_code = ?1",
              rusqlite::params![code_owned],
              |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?,
        )
      })
      .await?;

    row
      .map(|(code, json)| Self::decode(code, json))
      .transpose()
  }

  async fn create(
    &self,
    code: String,
    funfacts: Vec<String>,
  ) -> Result<FunFactRecord> {
    let record = FunFactRecord { state_code: code, funfacts };

    let code_owned = record.state_code.clone();
    let json = serde_json::to_string(&record.funfacts)?;

    let inserted: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "INSERT OR IGNORE INTO funfacts (state_code, funfacts) VALUES (?1, ?2)",
          rusqlite::params![code_owned, json],
        )?)
      })
      .await?;

    if inserted == 0 {
      return Err(Error::DuplicateCode(record.state_code));
    }
    Ok(record)
  }

  async fn save(&self, record: FunFactRecord) -> Result<FunFactRecord> {
    let code_owned = record.state_code.clone();
    let json = serde_json::to_string(&record.funfacts)?;

    let updated: usize = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE funfacts SET funfacts = ?2 WHERE state_code = ?1",
          rusqlite::params![code_owned, json],
        )?)
      })
      .await?;

    if updated == 0 {
      return Err(Error::MissingRecord(record.state_code));
    }
    Ok(record)
  }

  async fn find_all(&self) -> Result<Vec<FunFactRecord>> {
    let rows: Vec<(String, String)> = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT state_code, funfacts FROM funfacts ORDER BY state_code")?;
        let rows = stmt
          .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    rows
      .into_iter()
      .map(|(code, json)| Self::decode(code, json))
      .collect()
  }
}
