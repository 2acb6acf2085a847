//! Repository for the `portfolio_items` table.
//!
//! `details` and `gallery` are encoded to text on write and decoded on
//! read via the [`From<PortfolioRow>`] conversion, so callers only ever
//! see the structured forms.

use sitekit_core::content;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::portfolio::{PortfolioItem, PortfolioRow, UpsertPortfolioItem};

/// Column list for portfolio_items queries.
const COLUMNS: &str =
    "id, title, period, role, overview, details, client, image, category, gallery, size, \
     youtube_link";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// List all portfolio items. No ordering is guaranteed.
    pub async fn list(pool: &PgPool) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items");
        let rows = sqlx::query_as::<_, PortfolioRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(PortfolioItem::from).collect())
    }

    /// Find a portfolio item by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio_items WHERE id = $1");
        let row = sqlx::query_as::<_, PortfolioRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PortfolioItem::from))
    }

    /// Create a new portfolio item under a freshly generated ID.
    pub async fn create(
        pool: &PgPool,
        input: &UpsertPortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio_items \
                 (id, title, period, role, overview, details, client, image, category, \
                  gallery, size, youtube_link) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PortfolioRow>(&query)
            .bind(Uuid::new_v4())
            .bind(&input.title)
            .bind(&input.period)
            .bind(&input.role)
            .bind(&input.overview)
            .bind(input.details.encode())
            .bind(&input.client)
            .bind(&input.image)
            .bind(&input.category)
            .bind(content::encode_gallery(input.gallery.as_deref()))
            .bind(&input.size)
            .bind(&input.youtube_link)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Replace all mutable fields of a portfolio item. Returns `None`
    /// when the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpsertPortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio_items SET \
                 title = $2, period = $3, role = $4, overview = $5, details = $6, \
                 client = $7, image = $8, category = $9, gallery = $10, size = $11, \
                 youtube_link = $12 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, PortfolioRow>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.period)
            .bind(&input.role)
            .bind(&input.overview)
            .bind(input.details.encode())
            .bind(&input.client)
            .bind(&input.image)
            .bind(&input.category)
            .bind(content::encode_gallery(input.gallery.as_deref()))
            .bind(&input.size)
            .bind(&input.youtube_link)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PortfolioItem::from))
    }

    /// Delete a portfolio item by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio_items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
