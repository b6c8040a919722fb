//! # OpenAPI Specification Assembly
//!
//! Assembles all utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Adds the Bearer token security scheme to the OpenAPI spec.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Opaque bearer token resolved by the configured identity verifier.",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "BGTS API — Gift Transparency Service",
        version = "0.1.0",
        description = "Gift declaration service for the civil-service anti-corruption compliance process.\n\nProvides:\n- **Gift declarations** — submission, scoped listing, administrator review\n- **Penalty calculator** — fixed multiplier table (×2 / ×5 / ×10 by breach occurrence)\n- **Prohibited-source checker** — relationship classification with rule citations\n- **Penalty register** — fines levied for declaration breaches\n\nAuthentication: Bearer token via `Authorization: Bearer <token>` header.\nAll `/v1/*` endpoints require authentication. Health probes (`/health/*`) are unauthenticated.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    ),
    security(
        ("bearer_auth" = [])
    ),
    paths(
        crate::routes::penalty::calculate_penalty,
        crate::routes::source::check_source,
        crate::routes::gifts::submit_gift,
        crate::routes::gifts::list_gifts,
        crate::routes::gifts::get_gift,
        crate::routes::gifts::review_gift,
        crate::routes::penalties::list_penalties,
    ),
    components(
        schemas(
            crate::error::ErrorBody,
            crate::error::ErrorDetail,
            crate::routes::penalty::PenaltyRequest,
            crate::routes::penalty::PenaltyResponse,
            crate::routes::source::SourceCheckRequest,
            crate::routes::source::SourceCheckResponse,
            crate::routes::gifts::ReviewRequest,
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "gifts", description = "Gift declarations — submission, scoped listing, administrator review"),
        (name = "penalty", description = "Penalty calculation and the register of levied fines"),
        (name = "source", description = "Prohibited-source checker backed by the canonical rule table"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
