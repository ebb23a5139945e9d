use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::require_present;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub short_description: Option<String>,
    pub full_description: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub tech_stack: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for `ProjectStore::save`. `id: None` inserts, `Some` updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(custom(function = "title_present"))]
    pub title: String,

    #[validate(custom(function = "validate_slug"))]
    pub slug: String,

    #[serde(default)]
    pub short_description: Option<String>,

    #[serde(default)]
    pub full_description: Option<String>,

    #[validate(url(message = "GitHub URL must be a valid URL"), length(max = 500))]
    #[serde(default)]
    pub github_url: Option<String>,

    #[validate(url(message = "Live URL must be a valid URL"), length(max = 500))]
    #[serde(default)]
    pub live_url: Option<String>,

    #[validate(length(max = 500, message = "Image URL must be at most 500 characters"))]
    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub display_order: i32,

    #[validate(custom(function = "validate_tech_stack"))]
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl From<Project> for ProjectInput {
    fn from(project: Project) -> Self {
        Self {
            id: Some(project.id),
            title: project.title,
            slug: project.slug,
            short_description: project.short_description,
            full_description: project.full_description,
            github_url: project.github_url,
            live_url: project.live_url,
            image_url: project.image_url,
            featured: project.featured,
            display_order: project.display_order,
            tech_stack: project.tech_stack,
        }
    }
}

fn title_present(value: &str) -> Result<(), ValidationError> {
    require_present(value, "Title is required")
}

/// Slugs are 1-100 characters of lowercase letters, digits and hyphens.
pub fn validate_slug(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() || slug.len() > 100 {
        let mut err = ValidationError::new("slug_length");
        err.message = Some("Slug must be between 1 and 100 characters".into());
        return Err(err);
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        let mut err = ValidationError::new("slug_charset");
        err.message = Some("Slug must contain only lowercase letters, numbers, and hyphens".into());
        return Err(err);
    }
    Ok(())
}

fn validate_tech_stack(stack: &[String]) -> Result<(), ValidationError> {
    if stack.iter().any(|t| t.trim().is_empty() || t.chars().count() > 100) {
        let mut err = ValidationError::new("tech_stack");
        err.message =
            Some("Technologies must be non-empty and at most 100 characters".into());
        return Err(err);
    }
    Ok(())
}
