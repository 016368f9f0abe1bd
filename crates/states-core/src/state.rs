//! State reference records — the immutable half of the data model.
//!
//! A [`StateRecord`] is fixed at process start and never mutated. The only
//! dynamic data in the system is the fun-fact list, which is merged onto the
//! record at read time (see [`MergedState`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One entry in the state catalog. Field names on the wire match the
/// historical dataset (`state` for the display name, `capital_city`,
/// `admission_date`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateRecord {
  /// Two-letter uppercase abbreviation; the primary key for all lookups.
  pub code:           String,
  /// Display name, e.g. "Georgia".
  #[serde(rename = "state")]
  pub name:           String,
  #[serde(rename = "capital_city")]
  pub capital:        String,
  pub nickname:       String,
  pub population:     u64,
  pub admission_date: NaiveDate,
}

impl StateRecord {
  /// The two non-contiguous states are Alaska and Hawaii.
  pub fn is_contiguous(&self) -> bool {
    self.code != "AK" && self.code != "HI"
  }
}

/// A [`StateRecord`] enriched with the stored fun-fact list, when one
/// exists. The `funfacts` field is omitted from serialised output for
/// states that have never had a fact added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedState {
  #[serde(flatten)]
  pub record:   StateRecord,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub funfacts: Option<Vec<String>>,
}

impl MergedState {
  pub fn new(record: StateRecord, funfacts: Option<Vec<String>>) -> Self {
    Self { record, funfacts }
  }
}

// ─── Per-field reference views ───────────────────────────────────────────────

/// `{ "state": ..., "capital": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapitalView {
  pub state:   String,
  pub capital: String,
}

/// `{ "state": ..., "nickname": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NicknameView {
  pub state:    String,
  pub nickname: String,
}

/// `{ "state": ..., "population": "39,538,223" }` — the population is
/// returned pre-formatted with thousands separators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationView {
  pub state:      String,
  pub population: String,
}

/// `{ "state": ..., "admitted": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionView {
  pub state:    String,
  pub admitted: NaiveDate,
}

/// Group a non-negative integer with commas every three digits.
pub fn format_population(value: u64) -> String {
  let digits = value.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}

#[cfg(test)]
mod tests {
  use super::format_population;

  #[test]
  fn population_grouping() {
    assert_eq!(format_population(0), "0");
    assert_eq!(format_population(999), "999");
    assert_eq!(format_population(1_000), "1,000");
    assert_eq!(format_population(576_851), "576,851");
    assert_eq!(format_population(39_538_223), "39,538,223");
  }
}
