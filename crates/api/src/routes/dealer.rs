//! Route definitions for the `/dealers` pass-through.

use axum::routing::get;
use axum::Router;

use crate::handlers::dealer;
use crate::state::AppState;

/// Routes mounted at `/dealers`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dealer::list))
        .route("/{id}", get(dealer::get_by_id))
        .route("/{id}/reviews", get(dealer::reviews))
}
