//! # Penalty Calculation API
//!
//! Evaluates the fixed multiplier table for a declared value and breach
//! occurrence. Stateless; the result is never persisted.

use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

/// Penalty calculation request. Missing fields take the form defaults:
/// value 0, first breach.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PenaltyRequest {
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub breach_number: Option<i64>,
}

impl Validate for PenaltyRequest {
    fn validate(&self) -> Result<(), String> {
        // The calculator is total; nothing to bound here.
        Ok(())
    }
}

/// Penalty calculation result.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PenaltyResponse {
    pub value: f64,
    pub breach_number: u32,
    pub multiplier: u32,
    pub fine: f64,
    pub formatted: String,
}

/// Build the penalty router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/penalty", post(calculate_penalty))
}

/// POST /v1/penalty — Compute the fine for a breach.
#[utoipa::path(
    post,
    path = "/v1/penalty",
    request_body = PenaltyRequest,
    responses(
        (status = 200, description = "Penalty computed", body = PenaltyResponse),
    ),
    tag = "penalty"
)]
pub(crate) async fn calculate_penalty(
    body: Result<Json<PenaltyRequest>, JsonRejection>,
) -> Result<Json<PenaltyResponse>, AppError> {
    let req = extract_validated_json(body)?;
    let assessment = bgts_core::penalty::assess(
        req.value.unwrap_or(0.0),
        req.breach_number.unwrap_or(1),
    );

    Ok(Json(PenaltyResponse {
        value: assessment.value,
        breach_number: assessment.breach_number,
        multiplier: assessment.multiplier,
        fine: assessment.fine,
        formatted: assessment.formatted,
    }))
}
