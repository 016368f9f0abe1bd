//! Handlers for `/states/:state/funfact` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/states/:state/funfact` | One random fact, `{"funfact": "..."}` |
//! | `POST`   | `/states/:state/funfact` | Body `{"funfacts": [...]}`; 201 + record |
//! | `PATCH`  | `/states/:state/funfact` | Body `{"index": n, "funfact": "..."}` |
//! | `DELETE` | `/states/:state/funfact` | Body `{"index": n}` |
//!
//! Every handler resolves the path parameter against the catalog before
//! anything else; the service never sees an unvalidated abbreviation.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde_json::Value;
use states_core::{
  funfact::FunFactRecord,
  service::{FunFact, FunFactService},
  store::FunFactStore,
};

use crate::{
  error::ApiError,
  payload::{parse_funfact, parse_funfacts, parse_index},
};

/// `GET /states/:state/funfact`
pub async fn random<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
) -> Result<Json<FunFact>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  let fact = svc.random_fact(&code).await?;
  Ok(Json(fact))
}

/// `POST /states/:state/funfact` — returns 201 + the persisted record.
pub async fn add<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  let funfacts = parse_funfacts(&body)?;
  let record = svc.add_facts(&code, funfacts).await?;
  Ok((StatusCode::CREATED, Json(record)))
}

/// `PATCH /states/:state/funfact`
pub async fn update<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
  Json(body): Json<Value>,
) -> Result<Json<FunFactRecord>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  let index = parse_index(&body)?;
  let funfact = parse_funfact(&body)?;
  let record = svc.update_fact(&code, index, funfact).await?;
  Ok(Json(record))
}

/// `DELETE /states/:state/funfact`
pub async fn delete<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
  Json(body): Json<Value>,
) -> Result<Json<FunFactRecord>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  let index = parse_index(&body)?;
  let record = svc.delete_fact(&code, index).await?;
  Ok(Json(record))
}
