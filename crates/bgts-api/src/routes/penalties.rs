//! # Penalty Register API
//!
//! Read access to the register of levied fines.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use bgts_store::PenaltyRecord;

use crate::auth::CallerIdentity;
use crate::error::AppError;
use crate::state::AppState;

/// Build the penalty register router.
pub fn router() -> Router<AppState> {
    Router::new().route("/v1/penalties", get(list_penalties))
}

/// GET /v1/penalties — List levied fines, oldest first.
#[utoipa::path(
    get,
    path = "/v1/penalties",
    responses(
        (status = 200, description = "Penalty register contents"),
    ),
    tag = "penalty"
)]
pub(crate) async fn list_penalties(
    State(state): State<AppState>,
    _caller: CallerIdentity,
) -> Result<Json<Vec<PenaltyRecord>>, AppError> {
    Ok(Json(state.penalties.list()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bgts_store::{demo, PenaltyRegister};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn register_lists_demo_records() {
        let state = AppState::new()
            .with_penalties(PenaltyRegister::with_records(demo::demo_penalties()));
        let identity = CallerIdentity {
            role: Role::PublicServant,
            user_id: "tashi.sherpa".into(),
            agency: None,
        };
        let app = router()
            .layer(axum::Extension(identity))
            .with_state(state);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/v1/penalties")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let records: Vec<PenaltyRecord> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].public_servant, "Karma Wangdi");
        assert_eq!(records[0].fine_amount, 14000.0);
    }
}
