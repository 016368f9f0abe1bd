//! Fun-fact records and the 1-based index contract.
//!
//! Callers number facts from 1 (human-facing); storage is 0-based. The
//! conversion lives in exactly one function, [`resolve_index`], so the
//! bounds check cannot drift between update and delete.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The persisted fun-fact list for one state. At most one record exists per
/// state code; the record is created lazily on the first fact addition and
/// never deleted, though its list may be emptied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFactRecord {
  /// Canonical uppercase state code; unique across the collection.
  #[serde(rename = "stateCode")]
  pub state_code: String,
  /// Ordered list of facts. Insertion order defines the 1-based index used
  /// by update and delete.
  pub funfacts:   Vec<String>,
}

impl FunFactRecord {
  pub fn new(state_code: impl Into<String>, funfacts: Vec<String>) -> Self {
    Self { state_code: state_code.into(), funfacts }
  }
}

/// Convert a caller-supplied 1-based index into a 0-based position within a
/// list of `len` facts.
///
/// Valid inputs are `1..=len`; everything else (zero, negative, past the
/// end) is [`Error::IndexOutOfRange`] carrying `state` for the user-facing
/// message. No mutation happens on the error path — callers resolve the
/// position before touching the list.
pub fn resolve_index(state: &str, index: i64, len: usize) -> Result<usize> {
  if index >= 1 && (index as usize) <= len {
    Ok(index as usize - 1)
  } else {
    Err(Error::IndexOutOfRange { state: state.to_owned(), index })
  }
}

#[cfg(test)]
mod tests {
  use super::resolve_index;
  use crate::Error;

  fn out_of_range(index: i64, len: usize) {
    match resolve_index("Georgia", index, len) {
      Err(Error::IndexOutOfRange { state, index: i }) => {
        assert_eq!(state, "Georgia");
        assert_eq!(i, index);
      }
      other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
  }

  #[test]
  fn one_based_window_maps_onto_zero_based() {
    assert_eq!(resolve_index("Georgia", 1, 3).unwrap(), 0);
    assert_eq!(resolve_index("Georgia", 2, 3).unwrap(), 1);
    assert_eq!(resolve_index("Georgia", 3, 3).unwrap(), 2);
  }

  #[test]
  fn zero_is_rejected() {
    out_of_range(0, 3);
  }

  #[test]
  fn negative_is_rejected() {
    out_of_range(-1, 3);
    out_of_range(i64::MIN, 3);
  }

  #[test]
  fn past_the_end_is_rejected() {
    out_of_range(4, 3);
    out_of_range(i64::MAX, 3);
  }

  #[test]
  fn empty_list_rejects_everything() {
    out_of_range(1, 0);
  }
}
