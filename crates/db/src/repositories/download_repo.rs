//! Repository for the `downloads` table.

use sitekit_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::download::{DownloadItem, UpsertDownloadItem};

/// Column list for downloads queries.
const COLUMNS: &str = "id, title, description, category, file_url, created_at";

/// Provides CRUD operations for download items.
pub struct DownloadRepo;

impl DownloadRepo {
    /// List all download items, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<DownloadItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM downloads ORDER BY created_at DESC");
        sqlx::query_as::<_, DownloadItem>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a download item by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<DownloadItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM downloads WHERE id = $1");
        sqlx::query_as::<_, DownloadItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new download item. `created_at` is set by the store and
    /// never changes afterwards.
    pub async fn create(
        pool: &PgPool,
        input: &UpsertDownloadItem,
    ) -> Result<DownloadItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO downloads (id, title, description, category, file_url) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DownloadItem>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// Replace all mutable fields of a download item. Returns `None`
    /// when the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpsertDownloadItem,
    ) -> Result<Option<DownloadItem>, sqlx::Error> {
        let query = format!(
            "UPDATE downloads SET \
                 title = $2, description = $3, category = $4, file_url = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DownloadItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.file_url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a download item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM downloads WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count download items referencing a category name. Used by the
    /// category handlers to refuse deleting a category still in use.
    pub async fn count_by_category(pool: &PgPool, category: &str) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM downloads WHERE category = $1")
            .bind(category)
            .fetch_one(pool)
            .await
    }
}
