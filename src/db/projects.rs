use sqlx::{PgPool, Postgres, Transaction};

use crate::error::StoreError;
use crate::models::{Project, ProjectInput};

/// Project columns with the tech stack folded into an ordered array, so every
/// read returns fully materialized rows. Callers append `WHERE` and must
/// finish with `GROUP BY p.id`.
const SELECT_PROJECT: &str = "\
    SELECT p.id, p.title, p.slug, p.short_description, p.full_description, \
           p.github_url, p.live_url, p.image_url, p.featured, p.display_order, \
           COALESCE( \
               array_agg(t.technology::TEXT ORDER BY t.position) \
                   FILTER (WHERE t.technology IS NOT NULL), \
               '{}'::TEXT[] \
           ) AS tech_stack, \
           p.created_at, p.updated_at \
    FROM projects p \
    LEFT JOIN project_tech_stack t ON t.project_id = p.id";

const SLUG_CONFLICT: &str = "A project with this slug already exists";

pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    let query = format!("{SELECT_PROJECT} GROUP BY p.id ORDER BY p.display_order ASC, p.id ASC");
    sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
}

pub async fn list_featured(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    let query = format!(
        "{SELECT_PROJECT} WHERE p.featured = TRUE \
         GROUP BY p.id ORDER BY p.display_order ASC, p.id ASC"
    );
    sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Project>, sqlx::Error> {
    let query = format!("{SELECT_PROJECT} WHERE p.id = $1 GROUP BY p.id");
    sqlx::query_as::<_, Project>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Project>, sqlx::Error> {
    let query = format!("{SELECT_PROJECT} WHERE p.slug = $1 GROUP BY p.id");
    sqlx::query_as::<_, Project>(&query)
        .bind(slug)
        .fetch_optional(pool)
        .await
}

pub async fn exists_by_slug(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM projects WHERE slug = $1)")
        .bind(slug)
        .fetch_one(pool)
        .await
}

/// Insert or update a project and replace its tech stack in one transaction.
pub async fn save(pool: &PgPool, input: &ProjectInput) -> Result<Project, StoreError> {
    let mut tx = pool.begin().await?;

    let id = match input.id {
        None => insert_row(&mut tx, input).await?,
        Some(id) => {
            update_row(&mut tx, id, input)
                .await?
                .ok_or(StoreError::NotFound(id))?
        }
    };

    sqlx::query("DELETE FROM project_tech_stack WHERE project_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if !input.tech_stack.is_empty() {
        sqlx::query(
            "INSERT INTO project_tech_stack (project_id, position, technology)
             SELECT $1, (t.ord - 1)::INTEGER, t.technology
             FROM UNNEST($2::TEXT[]) WITH ORDINALITY AS t(technology, ord)",
        )
        .bind(id)
        .bind(&input.tech_stack)
        .execute(&mut *tx)
        .await?;
    }

    let query = format!("{SELECT_PROJECT} WHERE p.id = $1 GROUP BY p.id");
    let project = sqlx::query_as::<_, Project>(&query)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(project)
}

async fn insert_row(
    tx: &mut Transaction<'_, Postgres>,
    input: &ProjectInput,
) -> Result<i64, StoreError> {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO projects (title, slug, short_description, full_description,
                               github_url, live_url, image_url, featured, display_order)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING id",
    )
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.short_description)
    .bind(&input.full_description)
    .bind(&input.github_url)
    .bind(&input.live_url)
    .bind(&input.image_url)
    .bind(input.featured)
    .bind(input.display_order)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| StoreError::on_unique_violation(e, SLUG_CONFLICT))
}

async fn update_row(
    tx: &mut Transaction<'_, Postgres>,
    id: i64,
    input: &ProjectInput,
) -> Result<Option<i64>, StoreError> {
    sqlx::query_scalar::<_, i64>(
        "UPDATE projects SET title = $2, slug = $3, short_description = $4,
                full_description = $5, github_url = $6, live_url = $7, image_url = $8,
                featured = $9, display_order = $10, updated_at = now()
         WHERE id = $1
         RETURNING id",
    )
    .bind(id)
    .bind(&input.title)
    .bind(&input.slug)
    .bind(&input.short_description)
    .bind(&input.full_description)
    .bind(&input.github_url)
    .bind(&input.live_url)
    .bind(&input.image_url)
    .bind(input.featured)
    .bind(input.display_order)
    .fetch_optional(&mut **tx)
    .await
    .map_err(|e| StoreError::on_unique_violation(e, SLUG_CONFLICT))
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
