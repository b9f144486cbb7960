//! Handlers for the `/car-makes` resource.
//!
//! Reads are public; writes require the admin role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use dealership_core::error::CoreError;
use dealership_core::types::DbId;
use dealership_db::models::car_make::{CarMake, CarMakeFilter, CreateCarMake, UpdateCarMake};
use dealership_db::models::car_model::{CarModelWithMake, CreateCarModel};
use dealership_db::repositories::{CarMakeRepo, CarModelRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{DataResponse, Displayed};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "CarMake",
        id,
    })
}

/// GET /api/v1/car-makes
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CarMakeFilter>,
) -> AppResult<Json<DataResponse<Vec<Displayed<CarMake>>>>> {
    let makes = CarMakeRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse {
        data: Displayed::all(makes),
    }))
}

/// POST /api/v1/car-makes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCarMake>,
) -> AppResult<(StatusCode, Json<DataResponse<Displayed<CarMake>>>)> {
    let make = CarMakeRepo::create(&state.pool, &input).await?;
    tracing::info!(car_make_id = make.id, user_id = admin.user_id, "Car make created");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Displayed::new(make),
        }),
    ))
}

/// GET /api/v1/car-makes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Displayed<CarMake>>>> {
    let make = CarMakeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: Displayed::new(make),
    }))
}

/// PUT /api/v1/car-makes/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCarMake>,
) -> AppResult<Json<DataResponse<Displayed<CarMake>>>> {
    let make = CarMakeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse {
        data: Displayed::new(make),
    }))
}

/// DELETE /api/v1/car-makes/{id}
///
/// Removes the make and every car model referencing it.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    match CarMakeRepo::delete(&state.pool, id).await? {
        Some(_) => {
            tracing::info!(car_make_id = id, user_id = admin.user_id, "Car make removed by admin");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(not_found(id)),
    }
}

/// GET /api/v1/car-makes/{id}/models
pub async fn list_models(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Displayed<CarModelWithMake>>>>> {
    CarMakeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let models = CarModelRepo::list_by_car_make(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: Displayed::all(models),
    }))
}

/// POST /api/v1/car-makes/{id}/models
///
/// Creates a car model under the make in the path; any `car_make_id` in the
/// body is overridden.
pub async fn create_model(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCarModel>,
) -> AppResult<(StatusCode, Json<DataResponse<Displayed<CarModelWithMake>>>)> {
    let input = CreateCarModel {
        car_make_id: Some(id),
        ..input
    };
    let model = CarModelRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: Displayed::new(model),
        }),
    ))
}
