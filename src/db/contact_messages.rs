use sqlx::PgPool;

use crate::models::{ContactMessage, NewContactMessage};

pub async fn create(pool: &PgPool, message: &NewContactMessage) -> Result<ContactMessage, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        "INSERT INTO contact_messages (name, email, message)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(message.name())
    .bind(message.email())
    .bind(message.message())
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<ContactMessage>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Newest first.
pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        "SELECT * FROM contact_messages ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn list_unread(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
    sqlx::query_as::<_, ContactMessage>(
        "SELECT * FROM contact_messages WHERE read = FALSE
         ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_messages WHERE read = FALSE")
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

pub async fn mark_read(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE contact_messages SET read = TRUE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM contact_messages WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
