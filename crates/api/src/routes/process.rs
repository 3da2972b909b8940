//! Route definitions for the `/processes` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::process;
use crate::state::AppState;

/// Routes mounted at `/processes`.
///
/// ```text
/// GET    /                      -> list (skip, limit, active_only)
/// POST   /                      -> create
/// GET    /fetch                 -> fetch by process_id or process_name
/// PUT    /{process_id}          -> partial update
/// DELETE /{process_id}          -> delete (soft by default)
/// GET    /search/{search_term}  -> text search
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(process::list).post(process::create))
        .route("/fetch", get(process::fetch))
        .route(
            "/{process_id}",
            put(process::update).delete(process::delete),
        )
        .route("/search/{search_term}", get(process::search))
}
