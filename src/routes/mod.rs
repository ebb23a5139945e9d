pub mod projects;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/projects", get(projects::list))
        .route("/api/projects/{slug}", get(projects::get))
}
