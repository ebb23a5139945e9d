pub mod contact;
pub mod home;
pub mod projects;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home::index))
        .route("/about", get(home::about))
        .route("/how-i-built-this", get(home::how_i_built_this))
        .route("/projects", get(projects::list))
        .route("/projects/{slug}", get(projects::show))
        .route("/contact", get(contact::form_page).post(contact::submit))
}
