//! # Gift Declaration API
//!
//! Submission, scoped listing, lookup, and administrator review of gift
//! declarations. Handlers delegate to the injected [`bgts_store::GiftStore`];
//! no business logic lives here.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use bgts_core::{GiftDeclaration, GiftDeclarationInput, GiftId, ReviewDecision};

use crate::auth::{require_role, CallerIdentity, Role};
use crate::error::AppError;
use crate::extractors::{extract_validated_json, Validate};
use crate::state::AppState;

impl Validate for GiftDeclarationInput {
    fn validate(&self) -> Result<(), String> {
        if self.description.len() > 2000 {
            return Err("description must not exceed 2000 characters".to_string());
        }
        if self.relationship.len() > 255 {
            return Err("relationship must not exceed 255 characters".to_string());
        }
        if let Some(circumstances) = &self.circumstances {
            if circumstances.len() > 4000 {
                return Err("circumstances must not exceed 4000 characters".to_string());
            }
        }
        Ok(())
    }
}

/// Successful submission: the generated reference plus the stored record.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitGiftResponse {
    pub reference: String,
    pub data: GiftDeclaration,
}

/// Administrator review decision for a pending declaration.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    /// `approved` or `returned`.
    #[schema(value_type = String)]
    pub decision: ReviewDecision,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Validate for ReviewRequest {
    fn validate(&self) -> Result<(), String> {
        if let Some(comments) = &self.comments {
            if comments.len() > 4000 {
                return Err("comments must not exceed 4000 characters".to_string());
            }
        }
        Ok(())
    }
}

/// Build the gifts router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/gifts", post(submit_gift).get(list_gifts))
        .route("/v1/gifts/:id", get(get_gift))
        .route("/v1/gifts/:id/review", post(review_gift))
}

/// POST /v1/gifts — Submit a gift declaration.
#[utoipa::path(
    post,
    path = "/v1/gifts",
    responses(
        (status = 201, description = "Declaration stored; body carries the generated reference and record"),
        (status = 422, description = "Missing required fields, named in error.details.missing", body = crate::error::ErrorBody),
    ),
    tag = "gifts"
)]
pub(crate) async fn submit_gift(
    State(state): State<AppState>,
    caller: CallerIdentity,
    body: Result<Json<GiftDeclarationInput>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitGiftResponse>), AppError> {
    let input = extract_validated_json(body)?;
    let record = state.gifts.submit(input, &caller.submitter())?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitGiftResponse {
            reference: record.reference.to_string(),
            data: record,
        }),
    ))
}

/// GET /v1/gifts — List declarations visible to the caller.
///
/// Administrators see the whole register; public servants only their own
/// records. Insertion order, oldest first.
#[utoipa::path(
    get,
    path = "/v1/gifts",
    responses(
        (status = 200, description = "Declarations visible to the caller"),
    ),
    tag = "gifts"
)]
pub(crate) async fn list_gifts(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<Vec<GiftDeclaration>>, AppError> {
    Ok(Json(state.gifts.list(&caller.scope())?))
}

/// GET /v1/gifts/{id} — Look up a declaration.
#[utoipa::path(
    get,
    path = "/v1/gifts/{id}",
    params(("id" = Uuid, Path, description = "Declaration ID")),
    responses(
        (status = 200, description = "Declaration found"),
        (status = 404, description = "Not found", body = crate::error::ErrorBody),
    ),
    tag = "gifts"
)]
pub(crate) async fn get_gift(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
) -> Result<Json<GiftDeclaration>, AppError> {
    let gift_id = GiftId::from_uuid(id);
    let record = state.gifts.get_by_id(&gift_id)?;

    if !caller.scope().permits(&record) {
        // Return 404 instead of 403 to prevent id enumeration.
        return Err(AppError::NotFound(format!(
            "declaration {gift_id} not found"
        )));
    }

    Ok(Json(record))
}

/// POST /v1/gifts/{id}/review — Apply a review decision (administrators).
#[utoipa::path(
    post,
    path = "/v1/gifts/{id}/review",
    params(("id" = Uuid, Path, description = "Declaration ID")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Decision applied; body carries the updated record"),
        (status = 403, description = "Caller is not an administrator", body = crate::error::ErrorBody),
        (status = 409, description = "Declaration is not pending", body = crate::error::ErrorBody),
    ),
    tag = "gifts"
)]
pub(crate) async fn review_gift(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<Uuid>,
    body: Result<Json<ReviewRequest>, JsonRejection>,
) -> Result<Json<GiftDeclaration>, AppError> {
    require_role(&caller, Role::Administrator)?;
    let req = extract_validated_json(body)?;

    let record = state.gifts.review(
        &GiftId::from_uuid(id),
        req.decision,
        req.comments,
        Utc::now(),
    )?;

    tracing::info!(reference = %record.reference, status = %record.status,
        reviewer = %caller.user_id, "declaration reviewed");
    Ok(Json(record))
}
