//! Typed extraction of mutation request bodies.
//!
//! Bodies arrive as raw JSON so that a missing field, a wrong type, and a
//! valid payload each produce their own message instead of a generic
//! deserialisation rejection. The distinctions (and the message strings)
//! match what clients of the historical API expect.

use serde_json::Value;
use states_core::{Error, Result};

/// `POST` body: `{"funfacts": ["...", ...]}`.
///
/// Missing field and wrong type are reported separately; element type and
/// emptiness are also enforced here so the service always receives a
/// well-formed, non-empty list.
pub fn parse_funfacts(body: &Value) -> Result<Vec<String>> {
  let field = body
    .get("funfacts")
    .ok_or_else(|| Error::InvalidInput("State fun facts value required".to_owned()))?;

  let items = field.as_array().ok_or_else(|| {
    Error::InvalidInput("State fun facts value must be an array".to_owned())
  })?;

  let funfacts: Vec<String> = items
    .iter()
    .map(|v| v.as_str().map(str::to_owned))
    .collect::<Option<_>>()
    .ok_or_else(|| {
      Error::InvalidInput("State fun facts value must be an array".to_owned())
    })?;

  if funfacts.is_empty() {
    return Err(Error::InvalidInput("State fun facts value required".to_owned()));
  }
  Ok(funfacts)
}

/// `PATCH`/`DELETE` body field: `{"index": n, ...}`.
///
/// A present-but-zero (or negative) index is passed through — the service
/// reports it as out of range; only absence or a non-integer value is an
/// input error.
pub fn parse_index(body: &Value) -> Result<i64> {
  body
    .get("index")
    .and_then(Value::as_i64)
    .ok_or_else(|| Error::InvalidInput("State fun fact index value required".to_owned()))
}

/// `PATCH` body field: `{"funfact": "..."}`.
pub fn parse_funfact(body: &Value) -> Result<String> {
  body
    .get("funfact")
    .and_then(Value::as_str)
    .filter(|s| !s.is_empty())
    .map(str::to_owned)
    .ok_or_else(|| Error::InvalidInput("State fun fact value required".to_owned()))
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use states_core::Error;

  use super::{parse_funfact, parse_funfacts, parse_index};

  #[test]
  fn funfacts_happy_path() {
    let body = json!({ "funfacts": ["a", "b"] });
    assert_eq!(parse_funfacts(&body).unwrap(), vec!["a", "b"]);
  }

  #[test]
  fn funfacts_missing_vs_wrong_type() {
    let missing = parse_funfacts(&json!({})).unwrap_err();
    assert!(matches!(
      missing,
      Error::InvalidInput(m) if m == "State fun facts value required"
    ));

    for wrong in [json!({ "funfacts": "a" }), json!({ "funfacts": ["a", 3] })] {
      let err = parse_funfacts(&wrong).unwrap_err();
      assert!(matches!(
        err,
        Error::InvalidInput(m) if m == "State fun facts value must be an array"
      ));
    }
  }

  #[test]
  fn funfacts_empty_array_is_required_error() {
    let err = parse_funfacts(&json!({ "funfacts": [] })).unwrap_err();
    assert!(matches!(
      err,
      Error::InvalidInput(m) if m == "State fun facts value required"
    ));
  }

  #[test]
  fn index_zero_is_accepted_here() {
    // Bounds are the service's concern; extraction only demands an integer.
    assert_eq!(parse_index(&json!({ "index": 0 })).unwrap(), 0);
    assert_eq!(parse_index(&json!({ "index": -2 })).unwrap(), -2);
  }

  #[test]
  fn index_missing_or_non_integer() {
    for body in [json!({}), json!({ "index": "1" }), json!({ "index": 1.5 })] {
      assert!(parse_index(&body).is_err());
    }
  }

  #[test]
  fn funfact_must_be_a_non_empty_string() {
    assert_eq!(parse_funfact(&json!({ "funfact": "x" })).unwrap(), "x");
    for body in [json!({}), json!({ "funfact": "" }), json!({ "funfact": 7 })] {
      assert!(parse_funfact(&body).is_err());
    }
  }
}
