//! The state catalog and the request-validation boundary.
//!
//! The catalog is an immutable value built once at startup and injected into
//! the service — never a process global. [`StateCatalog::resolve`] is the
//! single place a raw, caller-supplied abbreviation becomes a canonical
//! catalog entry; nothing downstream ever sees an unvalidated code.

use crate::{Error, Result, state::StateRecord};

/// The embedded reference dataset, one object per state.
const STATES_JSON: &str = include_str!("../data/states.json");

/// Immutable set of state reference records, ordered as shipped in the
/// dataset (alphabetical by name). Lookup is linear — the catalog holds 50
/// entries for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct StateCatalog {
  states: Vec<StateRecord>,
}

impl StateCatalog {
  /// Build a catalog from the embedded dataset.
  pub fn embedded() -> Result<Self> {
    let states: Vec<StateRecord> = serde_json::from_str(STATES_JSON)?;
    Ok(Self { states })
  }

  /// Build a catalog from caller-supplied records — fixture catalogs for
  /// tests use this.
  pub fn from_records(states: Vec<StateRecord>) -> Self {
    Self { states }
  }

  /// Resolve a raw abbreviation to its catalog entry.
  ///
  /// Matching is case-insensitive; the returned record carries the
  /// canonical uppercase code and display name. Unknown codes are
  /// [`Error::InvalidStateCode`] — this is the validation boundary that
  /// must run before any store access.
  pub fn resolve(&self, raw: &str) -> Result<&StateRecord> {
    let code = raw.trim().to_ascii_uppercase();
    self
      .states
      .iter()
      .find(|st| st.code == code)
      .ok_or_else(|| Error::InvalidStateCode(raw.to_owned()))
  }

  /// Exact-match lookup by an already-canonical uppercase code.
  pub fn get(&self, code: &str) -> Option<&StateRecord> {
    self.states.iter().find(|st| st.code == code)
  }

  /// All records, optionally partitioned by the contiguous flag:
  /// `Some(true)` excludes Alaska and Hawaii, `Some(false)` returns only
  /// those two, `None` returns everything.
  pub fn list(&self, contiguous: Option<bool>) -> Vec<&StateRecord> {
    self
      .states
      .iter()
      .filter(|st| match contiguous {
        Some(contig) => st.is_contiguous() == contig,
        None => true,
      })
      .collect()
  }

  pub fn len(&self) -> usize {
    self.states.len()
  }

  pub fn is_empty(&self) -> bool {
    self.states.is_empty()
  }
}
