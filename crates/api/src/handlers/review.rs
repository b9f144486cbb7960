//! Handler for review submission.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use dealership_core::review::submit_review;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::Caller;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/reviews
///
/// Forwards the JSON payload to the external review backend. The caller is
/// authorized before the body is parsed, so an anonymous request is always
/// 403 and nothing is sent. A malformed body is 400; a backend failure is 502.
pub async fn create(
    State(state): State<AppState>,
    Caller(caller): Caller,
    body: Bytes,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    let permit = caller.authorize_review()?;

    let review: Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid review body: {e}")))?;

    submit_review(state.dealer_service.as_ref(), &permit, &review).await?;

    tracing::info!(user_id = permit.user_id(), "Review submitted");
    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}
