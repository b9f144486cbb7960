//! Handler for the public `/cars` catalogue.

use axum::extract::State;
use axum::Json;
use dealership_db::models::car_model::CarSummary;
use dealership_db::repositories::CarModelRepo;
use dealership_db::seed;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cars
///
/// Populates the starter inventory on first use, then lists every car model
/// paired with its make's name.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<CarSummary>>>> {
    seed::populate_if_empty(&state.pool).await?;
    let cars = CarModelRepo::list_summaries(&state.pool).await?;
    Ok(Json(DataResponse { data: cars }))
}
