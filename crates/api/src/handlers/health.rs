//! Handler for the root-level `/health` check.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Whether a dependency is usable from this process.
///
/// The database is queried; the external services are only checked for a
/// configured base URL and are never called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyState {
    Up,
    Down,
    Configured,
    Unconfigured,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the database answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: DependencyState,
    pub dealer_backend: DependencyState,
    pub sentiment_analyzer: DependencyState,
}

/// GET /health
pub async fn check(State(state): State<AppState>) -> Json<HealthReport> {
    let database = match dealership_db::health_check(&state.pool).await {
        Ok(()) => DependencyState::Up,
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the database");
            DependencyState::Down
        }
    };

    Json(HealthReport {
        status: if database == DependencyState::Up { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        dealer_backend: configured(&state.config.dealer_backend_url),
        sentiment_analyzer: configured(&state.config.sentiment_analyzer_url),
    })
}

fn configured(base_url: &str) -> DependencyState {
    if base_url.trim().is_empty() {
        DependencyState::Unconfigured
    } else {
        DependencyState::Configured
    }
}
