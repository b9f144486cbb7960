//! Pass-through handlers for the external dealer and sentiment services.

use axum::extract::{Path, Query, State};
use axum::Json;
use dealership_core::dealer::dealer_reviews_with_sentiment;
use dealership_core::types::DbId;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::query::{DealerListParams, SentimentParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dealers
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DealerListParams>,
) -> AppResult<Json<DataResponse<Vec<Value>>>> {
    let state_filter = params.state.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let dealers = state.dealer_service.dealers(state_filter).await?;
    Ok(Json(DataResponse { data: dealers }))
}

/// GET /api/v1/dealers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Value>>> {
    let dealer = state.dealer_service.dealer(id).await?;
    Ok(Json(DataResponse { data: dealer }))
}

/// GET /api/v1/dealers/{id}/reviews
pub async fn reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Value>>>> {
    let reviews = dealer_reviews_with_sentiment(state.dealer_service.as_ref(), id).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// GET /api/v1/sentiment?text=
pub async fn sentiment(
    State(state): State<AppState>,
    Query(params): Query<SentimentParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let text = params.text.trim();
    if text.is_empty() {
        return Err(AppError::BadRequest("text must not be empty".into()));
    }
    let label = state.dealer_service.analyze_sentiment(text).await?;
    Ok(Json(DataResponse {
        data: json!({ "text": text, "sentiment": label }),
    }))
}
