//! # bgts-api — Axum API Services for the Gift Transparency Service
//!
//! HTTP layer over the gift declaration store and the rule tables.
//!
//! ## API Surface
//!
//! | Route                      | Module                 | Domain                  |
//! |----------------------------|------------------------|-------------------------|
//! | `POST /v1/penalty`         | [`routes::penalty`]    | Fine calculator         |
//! | `POST /v1/source-check`    | [`routes::source`]     | Prohibited-source check |
//! | `POST /v1/gifts`           | [`routes::gifts`]      | Declaration submission  |
//! | `GET  /v1/gifts`           | [`routes::gifts`]      | Scoped listing          |
//! | `GET  /v1/gifts/{id}`      | [`routes::gifts`]      | Declaration lookup      |
//! | `POST /v1/gifts/{id}/review` | [`routes::gifts`]    | Administrator review    |
//! | `GET  /v1/penalties`       | [`routes::penalties`]  | Penalty register        |
//! | `GET  /health/*`           | this module            | Health probes           |
//! | `GET  /openapi.json`       | [`openapi`]            | OpenAPI document        |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → AuthMiddleware → Handler
//! ```
//!
//! Health probes are mounted outside the auth middleware so they remain
//! accessible without credentials.
//!
//! ## Crate Policy
//!
//! - No business logic in route handlers — delegates to `bgts-core` and
//!   the injected `bgts-store` backend.
//! - All errors map to structured HTTP responses via [`AppError`].

pub mod auth;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::auth::AuthConfig;

pub use error::AppError;
pub use state::AppState;

/// Assemble the full application router with all routes and middleware.
///
/// `auth` controls bearer-token verification; pass a default config to
/// run in open development mode.
pub fn app(state: AppState, auth: AuthConfig) -> Router {
    // Authenticated API routes.
    //
    // Body size limit: 1 MiB. Declarations are small; anything larger is
    // a client error.
    let api = Router::new()
        .merge(routes::penalty::router())
        .merge(routes::source::router())
        .merge(routes::gifts::router())
        .merge(routes::penalties::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(from_fn(auth::auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(auth))
        .with_state(state.clone());

    // Unauthenticated health probes.
    let unauthenticated = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness))
        .with_state(state);

    Router::new().merge(unauthenticated).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — verifies the application is ready to serve traffic.
///
/// Checks that the declaration store is readable (for the file backend
/// this exercises an actual read of the register).
///
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    if let Err(e) = state.gifts.list(&bgts_store::CallerScope::Unrestricted) {
        tracing::warn!(error = %e, "readiness check failed");
        return (StatusCode::SERVICE_UNAVAILABLE, "store unreachable").into_response();
    }
    (StatusCode::OK, "ready").into_response()
}
