use askama::Template;
use axum::extract::State;
use axum::response::Html;

use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    featured_projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate;

#[derive(Template)]
#[template(path = "how_i_built_this.html")]
struct HowIBuiltThisTemplate;

pub async fn index(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    tracing::debug!("Rendering home page");
    let featured_projects = state.projects.get_featured_projects().await?;
    Ok(Html(IndexTemplate { featured_projects }.render()?))
}

pub async fn about() -> Result<Html<String>, AppError> {
    Ok(Html(AboutTemplate.render()?))
}

pub async fn how_i_built_this() -> Result<Html<String>, AppError> {
    Ok(Html(HowIBuiltThisTemplate.render()?))
}
