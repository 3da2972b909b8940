pub mod health;
pub mod process;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET    /                                 health check
///
/// POST   /processes/                       create
/// GET    /processes/                       list
/// GET    /processes/fetch                  fetch by id or name
/// PUT    /processes/{process_id}           partial update
/// DELETE /processes/{process_id}           delete (soft by default)
/// GET    /processes/search/{search_term}   text search
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/processes/", process::router())
}
