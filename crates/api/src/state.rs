use std::sync::Arc;

use dealership_core::dealer::DealerService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dealership_db::DbPool,
    /// Server configuration (JWT secret, service URLs).
    pub config: Arc<ServerConfig>,
    /// External dealer, review and sentiment services.
    pub dealer_service: Arc<dyn DealerService>,
}
