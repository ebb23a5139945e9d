use std::sync::Arc;

use crate::error::StoreError;
use crate::models::{Project, ProjectInput};
use crate::store::ProjectStore;

/// Read and write access to portfolio projects for the HTTP layer.
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// All projects in display order.
    pub async fn get_all_projects(&self) -> Result<Vec<Project>, StoreError> {
        tracing::debug!("Fetching all projects");
        self.store.list_all().await
    }

    pub async fn get_featured_projects(&self) -> Result<Vec<Project>, StoreError> {
        tracing::debug!("Fetching featured projects");
        self.store.list_featured().await
    }

    pub async fn get_project_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        tracing::debug!("Fetching project with slug: {slug}");
        self.store.find_by_slug(slug).await
    }

    pub async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>, StoreError> {
        tracing::debug!("Fetching project with id: {id}");
        self.store.find_by_id(id).await
    }

    pub async fn save_project(&self, project: &ProjectInput) -> Result<Project, StoreError> {
        tracing::info!("Saving project: {}", project.title);
        self.store.save(project).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<(), StoreError> {
        tracing::info!("Deleting project with id: {id}");
        self.store.delete_by_id(id).await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, StoreError> {
        self.store.exists_by_slug(slug).await
    }
}
