//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Error payloads are JSON `{"message": "..."}` — the shape clients of the
//! historical API expect, message strings included.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use states_core::Error as CoreError;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("not found: {0}")]
  NotFound(String),

  #[error("internal error: {0}")]
  Internal(String),
}

impl From<CoreError> for ApiError {
  fn from(err: CoreError) -> Self {
    match err {
      CoreError::InvalidStateCode(_) => {
        Self::BadRequest("Invalid state abbreviation parameter".to_owned())
      }
      CoreError::InvalidInput(message) => Self::BadRequest(message),
      CoreError::NotFound(_) => Self::NotFound("State not found".to_owned()),
      CoreError::NoFactsAvailable { state } => {
        Self::NotFound(format!("No Fun Facts found for {state}"))
      }
      CoreError::IndexOutOfRange { state, .. } => {
        Self::BadRequest(format!("No Fun Fact found at that index for {state}"))
      }
      CoreError::Storage(e) => Self::Internal(e.to_string()),
      CoreError::Serialization(e) => Self::Internal(e.to_string()),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::Internal(m) => {
        tracing::error!(error = %m, "internal error");
        (StatusCode::INTERNAL_SERVER_ERROR, m.clone())
      }
    };
    (status, Json(json!({ "message": message }))).into_response()
  }
}
