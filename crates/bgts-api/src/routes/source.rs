//! # Prohibited-Source Check API
//!
//! Classifies a relationship category against the canonical rule table.
//! Stateless; verdicts are derived, never stored.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Source check request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SourceCheckRequest {
    #[serde(default)]
    pub relationship: String,
}

impl Validate for SourceCheckRequest {
    fn validate(&self) -> Result<(), String> {
        if self.relationship.len() > 255 {
            return Err("relationship must not exceed 255 characters".to_string());
        }
        Ok(())
    }
}

/// Source check verdict as shown to the declarant.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SourceCheckResponse {
    /// The category that was checked, echoed back.
    pub relationship: String,
    /// Verdict keyword: prohibited, allowed, restricted, review_required.
    pub verdict: String,
    pub title: String,
    pub description: String,
    /// The rule citation backing the verdict.
    pub rule: String,
    /// `true` when acceptance is barred, `false` when conditionally
    /// allowed, `null` when review is required.
    pub is_prohibited: Option<bool>,
}

/// Build the source check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/source-check", post(check_source))
}

/// POST /v1/source-check — Classify a relationship category.
#[utoipa::path(
    post,
    path = "/v1/source-check",
    request_body = SourceCheckRequest,
    responses(
        (status = 200, description = "Relationship classified", body = SourceCheckResponse),
    ),
    tag = "source"
)]
pub(crate) async fn check_source(
    body: Result<Json<SourceCheckRequest>, JsonRejection>,
) -> Result<Json<SourceCheckResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let classification = bgts_core::source::classify(&req.relationship);

    Ok(Json(SourceCheckResponse {
        relationship: classification.category,
        verdict: classification.verdict.as_str().to_string(),
        title: classification.title.to_string(),
        description: classification.description.to_string(),
        rule: classification.rule_citation.to_string(),
        is_prohibited: classification.verdict.is_prohibited(),
    }))
}
