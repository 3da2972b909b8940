use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Per-request connections are acquired from the pool for the duration of a
/// statement and released on every exit path by the pool itself.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gridform_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
