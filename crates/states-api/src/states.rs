//! Handlers for state reference reads.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/states/` | Optional `?contig=true\|false` |
//! | `GET`  | `/states/:state` | Merged record, 400 on unknown abbreviation |
//! | `GET`  | `/states/:state/capital` | `{state, capital}` |
//! | `GET`  | `/states/:state/nickname` | `{state, nickname}` |
//! | `GET`  | `/states/:state/population` | `{state, population}` (formatted) |
//! | `GET`  | `/states/:state/admission` | `{state, admitted}` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use states_core::{
  service::FunFactService,
  state::{AdmissionView, CapitalView, MergedState, NicknameView, PopulationView},
  store::FunFactStore,
};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// `true` for the 48 contiguous states, `false` for AK + HI only.
  pub contig: Option<bool>,
}

/// `GET /states/[?contig=true|false]`
pub async fn list<S>(
  State(svc): State<FunFactService<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<MergedState>>, ApiError>
where
  S: FunFactStore,
{
  let states = svc.list_all(params.contig).await?;
  Ok(Json(states))
}

/// `GET /states/:state`
pub async fn get_one<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
) -> Result<Json<MergedState>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  let merged = svc.get_one(&code).await?;
  Ok(Json(merged))
}

/// `GET /states/:state/capital`
pub async fn capital<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
) -> Result<Json<CapitalView>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  Ok(Json(svc.capital(&code)?))
}

/// `GET /states/:state/nickname`
pub async fn nickname<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
) -> Result<Json<NicknameView>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  Ok(Json(svc.nickname(&code)?))
}

/// `GET /states/:state/population`
pub async fn population<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
) -> Result<Json<PopulationView>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  Ok(Json(svc.population(&code)?))
}

/// `GET /states/:state/admission`
pub async fn admission<S>(
  State(svc): State<FunFactService<S>>,
  Path(state): Path<String>,
) -> Result<Json<AdmissionView>, ApiError>
where
  S: FunFactStore,
{
  let code = svc.catalog().resolve(&state)?.code.clone();
  Ok(Json(svc.admission(&code)?))
}
