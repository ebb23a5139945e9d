use std::path::Path;

use validator::{Validate, ValidationErrors};

use crate::error::StoreError;
use crate::models::ProjectInput;
use crate::services::ProjectService;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed project '{slug}': {errors}")]
    Invalid {
        slug: String,
        errors: ValidationErrors,
    },

    #[error("Failed to store seed project: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Default, PartialEq)]
pub struct SeedReport {
    pub inserted: usize,
    pub skipped: usize,
}

pub async fn load_file(projects: &ProjectService, path: &Path) -> Result<SeedReport, SeedError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;
    load_json(projects, &raw).await
}

/// Insert every project from a JSON array whose slug is not taken yet.
///
/// All entries are validated before anything is written.
pub async fn load_json(projects: &ProjectService, raw: &str) -> Result<SeedReport, SeedError> {
    let entries: Vec<ProjectInput> = serde_json::from_str(raw)?;

    for entry in &entries {
        entry.validate().map_err(|errors| SeedError::Invalid {
            slug: entry.slug.clone(),
            errors,
        })?;
    }

    let mut report = SeedReport::default();
    for mut entry in entries {
        if projects.slug_exists(&entry.slug).await? {
            tracing::debug!("Seed project {} already exists, skipping", entry.slug);
            report.skipped += 1;
            continue;
        }
        entry.id = None;
        projects.save_project(&entry).await?;
        report.inserted += 1;
    }

    tracing::info!(
        "Seeded projects: {} inserted, {} skipped",
        report.inserted,
        report.skipped
    );
    Ok(report)
}
