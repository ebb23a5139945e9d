use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate {
    projects: Vec<Project>,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
struct ProjectDetailTemplate {
    project: Project,
}

pub async fn list(State(state): State<SharedState>) -> Result<Html<String>, AppError> {
    tracing::debug!("Rendering projects listing page");
    let projects = state.projects.get_all_projects().await?;
    Ok(Html(ProjectsTemplate { projects }.render()?))
}

/// Unknown slugs send the visitor back to the listing.
pub async fn show(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let Some(project) = state.projects.get_project_by_slug(&slug).await? else {
        tracing::warn!("Project not found with slug: {slug}");
        return Ok(Redirect::to("/projects").into_response());
    };

    Ok(Html(ProjectDetailTemplate { project }.render()?).into_response())
}
