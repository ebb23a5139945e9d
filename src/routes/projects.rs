use axum::Json;
use axum::extract::{Path, State};

use crate::error::AppError;
use crate::models::Project;
use crate::state::SharedState;

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Project>>, AppError> {
    tracing::debug!("API: Fetching all projects");
    let projects = state.projects.get_all_projects().await?;
    Ok(Json(projects))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, AppError> {
    let project = state
        .projects
        .get_project_by_slug(&slug)
        .await?
        .ok_or_else(|| {
            tracing::warn!("API: Project not found with slug: {slug}");
            AppError::NotFound("Project not found".to_string())
        })?;
    Ok(Json(project))
}
