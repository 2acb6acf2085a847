//! Repository for the `page_sections` table.

use sqlx::PgPool;

use crate::models::page_section::{PageSection, UpsertPageSection};

/// Column list for page_sections queries.
const COLUMNS: &str = "page, title, subtitle, background_image";

/// Keyed storage for editable page headers.
pub struct PageSectionRepo;

impl PageSectionRepo {
    /// Find the section for a page. `None` when nothing has been saved
    /// for it yet; defaults belong to the presentation layer.
    pub async fn find_by_page(
        pool: &PgPool,
        page: &str,
    ) -> Result<Option<PageSection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM page_sections WHERE page = $1");
        sqlx::query_as::<_, PageSection>(&query)
            .bind(page)
            .fetch_optional(pool)
            .await
    }

    /// Insert or fully replace the section for a page.
    pub async fn upsert(
        pool: &PgPool,
        page: &str,
        input: &UpsertPageSection,
    ) -> Result<PageSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_sections (page, title, subtitle, background_image) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (page) DO UPDATE SET \
                 title = EXCLUDED.title, \
                 subtitle = EXCLUDED.subtitle, \
                 background_image = EXCLUDED.background_image \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageSection>(&query)
            .bind(page)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.background_image)
            .fetch_one(pool)
            .await
    }
}
