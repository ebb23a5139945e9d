//! Persistence seams used by the service layer.
//!
//! Every method is one unit of work against the backend. Reads always return
//! projects with their tech stack loaded.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db;
use crate::error::StoreError;
use crate::models::{ContactMessage, NewContactMessage, Project, ProjectInput};

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Insert when `project.id` is `None`, otherwise update that row.
    async fn save(&self, project: &ProjectInput) -> Result<Project, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, StoreError>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError>;
    /// Ascending `display_order`, ties in insertion order.
    async fn list_all(&self) -> Result<Vec<Project>, StoreError>;
    async fn list_featured(&self) -> Result<Vec<Project>, StoreError>;
    async fn exists_by_slug(&self, slug: &str) -> Result<bool, StoreError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ContactMessage>, StoreError>;
    /// Newest first.
    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError>;
    async fn list_unread(&self) -> Result<Vec<ContactMessage>, StoreError>;
    async fn count_unread(&self) -> Result<i64, StoreError>;
    async fn mark_read(&self, id: i64) -> Result<(), StoreError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;
}

/// PostgreSQL-backed implementation of both stores.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for PgStore {
    async fn save(&self, project: &ProjectInput) -> Result<Project, StoreError> {
        db::projects::save(&self.pool, project).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Project>, StoreError> {
        Ok(db::projects::find_by_id(&self.pool, id).await?)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Project>, StoreError> {
        Ok(db::projects::find_by_slug(&self.pool, slug).await?)
    }

    async fn list_all(&self) -> Result<Vec<Project>, StoreError> {
        Ok(db::projects::list(&self.pool).await?)
    }

    async fn list_featured(&self) -> Result<Vec<Project>, StoreError> {
        Ok(db::projects::list_featured(&self.pool).await?)
    }

    async fn exists_by_slug(&self, slug: &str) -> Result<bool, StoreError> {
        Ok(db::projects::exists_by_slug(&self.pool, slug).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        Ok(db::projects::delete(&self.pool, id).await?)
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn save(&self, message: NewContactMessage) -> Result<ContactMessage, StoreError> {
        Ok(db::contact_messages::create(&self.pool, &message).await?)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContactMessage>, StoreError> {
        Ok(db::contact_messages::find_by_id(&self.pool, id).await?)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Ok(db::contact_messages::list(&self.pool).await?)
    }

    async fn list_unread(&self) -> Result<Vec<ContactMessage>, StoreError> {
        Ok(db::contact_messages::list_unread(&self.pool).await?)
    }

    async fn count_unread(&self) -> Result<i64, StoreError> {
        Ok(db::contact_messages::count_unread(&self.pool).await?)
    }

    async fn mark_read(&self, id: i64) -> Result<(), StoreError> {
        Ok(db::contact_messages::mark_read(&self.pool, id).await?)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        Ok(db::contact_messages::delete(&self.pool, id).await?)
    }
}
