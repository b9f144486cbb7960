//! Handlers for the `/car-models` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use dealership_core::car_model::{
    car_type_choices, CarTypeChoice, DEFAULT_CAR_TYPE, DEFAULT_YEAR, MAX_YEAR, MIN_YEAR,
};
use dealership_core::error::CoreError;
use dealership_core::types::DbId;
use dealership_db::models::car_model::{
    CarModelFilter, CarModelWithMake, CreateCarModel, UpdateCarModel,
};
use dealership_db::repositories::CarModelRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, Displayed};
use crate::state::AppState;

/// Allowed values and defaults for car model form fields.
#[derive(Debug, Serialize)]
pub struct CarModelChoices {
    pub types: Vec<CarTypeChoice>,
    pub default_type: &'static str,
    pub year: YearBounds,
}

#[derive(Debug, Serialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CarModel",
        id,
    })
}

/// GET /api/v1/car-models
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CarModelFilter>,
) -> AppResult<Json<DataResponse<Vec<Displayed<CarModelWithMake>>>>> {
    let models = CarModelRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse {
        data: Displayed::all(models),
    }))
}

/// GET /api/v1/car-models/choices
pub async fn choices() -> Json<DataResponse<CarModelChoices>> {
    Json(DataResponse {
        data: CarModelChoices {
            types: car_type_choices(),
            default_type: DEFAULT_CAR_TYPE,
            year: YearBounds {
                min: MIN_YEAR,
                max: MAX_YEAR,
                default: DEFAULT_YEAR,
            },
        },
    })
}

/// POST /api/v1/car-models
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCarModel>,
) -> AppResult<(StatusCode, Json<DataResponse<Displayed<CarModelWithMake>>>)> {
    let model = CarModelRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Displayed::new(model),
        }),
    ))
}

/// GET /api/v1/car-models/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Displayed<CarModelWithMake>>>> {
    let model = CarModelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: Displayed::new(model),
    }))
}

/// PUT /api/v1/car-models/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarModel>,
) -> AppResult<Json<DataResponse<Displayed<CarModelWithMake>>>> {
    let model = CarModelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: Displayed::new(model),
    }))
}

/// DELETE /api/v1/car-models/{id}
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CarModelRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
