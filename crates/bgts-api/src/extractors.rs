//! # Request Extractors
//!
//! Shared JSON extraction helper: turns body parse failures into
//! structured 422 responses and runs request-level sanity checks before
//! a handler sees the value. Domain validation (required fields) stays
//! in `bgts-core`; the checks here only bound sizes.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::AppError;

/// Request-level sanity checks, run by [`extract_validated_json`].
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Unwrap a JSON body, mapping rejections to 422 and running the
/// request's [`Validate`] impl.
pub fn extract_validated_json<T: Validate>(
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let Json(value) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    value.validate().map_err(AppError::validation)?;
    Ok(value)
}
