//! Repository for the `notices` table.

use sitekit_core::types::DbId;
use sqlx::PgPool;

use crate::models::notice::{Notice, UpsertNotice};

/// Column list for notices queries.
const COLUMNS: &str = "id, title, content, author, date, views";

/// Provides CRUD operations for the notice board.
pub struct NoticeRepo;

impl NoticeRepo {
    /// List all notices, newest first. Does not touch view counters.
    pub async fn list(pool: &PgPool) -> Result<Vec<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, Notice>(&query).fetch_all(pool).await
    }

    /// Find a notice by its ID without counting a view.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notices WHERE id = $1");
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a notice by ID for reading, incrementing its view counter
    /// by exactly one in the same statement.
    pub async fn view(pool: &PgPool, id: DbId) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET views = views + 1 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new notice. `date` and `views` are set by the store.
    pub async fn create(pool: &PgPool, input: &UpsertNotice) -> Result<Notice, sqlx::Error> {
        let query = format!(
            "INSERT INTO notices (title, content, author) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .fetch_one(pool)
            .await
    }

    /// Replace all mutable fields of a notice, leaving `date` and
    /// `views` intact. Returns `None` when the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpsertNotice,
    ) -> Result<Option<Notice>, sqlx::Error> {
        let query = format!(
            "UPDATE notices SET title = $2, content = $3, author = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notice>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.author)
            .fetch_optional(pool)
            .await
    }

    /// Delete a notice by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notices WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
