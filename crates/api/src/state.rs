use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers receive their store dependency through this state explicitly;
/// there is no ambient container lookup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fortunes_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
