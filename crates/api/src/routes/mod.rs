pub mod car_make;
pub mod car_model;
pub mod dealer;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{cars, dealer as dealer_handlers, review};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /car-makes                         list (?q=), create (admin)
/// /car-makes/{id}                    get, update, delete (admin writes)
/// /car-makes/{id}/models             list, create (admin)
///
/// /car-models                        list (?type=&year=&car_make_id=&q=), create (admin)
/// /car-models/choices                type enumeration, year bounds, defaults
/// /car-models/{id}                   get, update, delete (admin writes)
///
/// /cars                              catalogue (populates on first use)
/// /reviews                           submit review (authenticated)
///
/// /dealers                           list (?state=)
/// /dealers/{id}                      get
/// /dealers/{id}/reviews              reviews with sentiment
/// /sentiment                         analyze (?text=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/car-makes", car_make::router())
        .nest("/car-models", car_model::router())
        .nest("/dealers", dealer::router())
        .route("/cars", get(cars::list))
        .route("/reviews", post(review::create))
        .route("/sentiment", get(dealer_handlers::sentiment))
}
