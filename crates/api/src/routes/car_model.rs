//! Route definitions for the `/car-models` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::car_model;
use crate::state::AppState;

/// Routes mounted at `/car-models`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /choices         -> choices
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car_model::list).post(car_model::create))
        .route("/choices", get(car_model::choices))
        .route(
            "/{id}",
            get(car_model::get_by_id)
                .put(car_model::update)
                .delete(car_model::delete),
        )
}
