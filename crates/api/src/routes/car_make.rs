//! Route definitions for the `/car-makes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::car_make;
use crate::state::AppState;

/// Routes mounted at `/car-makes`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/models     -> list_models
/// POST   /{id}/models     -> create_model
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car_make::list).post(car_make::create))
        .route(
            "/{id}",
            get(car_make::get_by_id)
                .put(car_make::update)
                .delete(car_make::delete),
        )
        .route(
            "/{id}/models",
            get(car_make::list_models).post(car_make::create_model),
        )
}
