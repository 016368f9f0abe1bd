//! JSON REST API for the state fun-facts service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`states_core::store::FunFactStore`]. Transport concerns (TLS, auth) are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/states", states_api::api_router(service))
//! ```

pub mod error;
pub mod funfacts;
pub mod payload;
pub mod states;

use axum::{Router, routing::get};
use serde::Deserialize;
use states_core::{service::FunFactService, store::FunFactStore};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` (or the
/// `STATES_*` environment).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host:    String,
  pub port:    u16,
  /// Path to the SQLite database file.
  pub db_path: std::path::PathBuf,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: FunFactService<S>) -> Router<()>
where
  S: FunFactStore + 'static,
{
  Router::new()
    .route("/", get(states::list::<S>))
    .route("/{state}", get(states::get_one::<S>))
    .route(
      "/{state}/funfact",
      get(funfacts::random::<S>)
        .post(funfacts::add::<S>)
        .patch(funfacts::update::<S>)
        .delete(funfacts::delete::<S>),
    )
    .route("/{state}/capital", get(states::capital::<S>))
    .route("/{state}/nickname", get(states::nickname::<S>))
    .route("/{state}/population", get(states::population::<S>))
    .route("/{state}/admission", get(states::admission::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}
