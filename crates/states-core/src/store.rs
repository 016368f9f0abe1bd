//! The `FunFactStore` trait — the persistence boundary.
//!
//! The trait is implemented by storage backends (e.g. `states-store-sqlite`).
//! The service depends on this abstraction, not on any concrete backend.
//! Three operations are all the core needs: find, lazy create, save.

use std::future::Future;

use crate::funfact::FunFactRecord;

/// Abstraction over the fun-fact document collection.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
///
/// There is no versioning or compare-and-swap in this contract: concurrent
/// read-modify-write cycles against the same state code race, and the later
/// `save` wins.
pub trait FunFactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Retrieve the record for a state code. Returns `None` if no fact has
  /// ever been added for that state.
  fn find_by_code<'a>(
    &'a self,
    code: &'a str,
  ) -> impl Future<Output = Result<Option<FunFactRecord>, Self::Error>> + Send + 'a;

  /// Create and persist a new record seeded with `funfacts`. The caller
  /// guarantees no record exists yet for `code` and that `funfacts` is
  /// non-empty.
  fn create(
    &self,
    code: String,
    funfacts: Vec<String>,
  ) -> impl Future<Output = Result<FunFactRecord, Self::Error>> + Send + '_;

  /// Persist an in-place mutation of an existing record and return it.
  fn save(
    &self,
    record: FunFactRecord,
  ) -> impl Future<Output = Result<FunFactRecord, Self::Error>> + Send + '_;

  /// Fetch every record in the collection. Used by the list endpoint so the
  /// merge is one scan instead of a query per state.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<FunFactRecord>, Self::Error>> + Send + '_;
}
