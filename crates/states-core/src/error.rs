//! Error types for `states-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The supplied state abbreviation does not resolve to a catalog entry.
  /// Raised at the validation boundary, before any store access.
  #[error("invalid state abbreviation: {0:?}")]
  InvalidStateCode(String),

  /// A request payload field is missing or malformed.
  #[error("{0}")]
  InvalidInput(String),

  /// A validated code reached the service but matched no catalog entry.
  #[error("state not found: {0}")]
  NotFound(String),

  /// The state has no fun-fact record, or its list is empty.
  /// A "no data" condition rather than a hard failure; carries the state's
  /// display name for the user-facing message.
  #[error("no fun facts found for {state}")]
  NoFactsAvailable { state: String },

  /// A 1-based index fell outside the fact list after conversion.
  #[error("no fun fact at index {index} for {state}")]
  IndexOutOfRange { state: String, index: i64 },

  /// Persistence round-trip failure; surfaced immediately, never retried.
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

impl Error {
  /// Wrap a store backend error.
  pub fn storage<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Storage(Box::new(err))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
