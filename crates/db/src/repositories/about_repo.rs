//! Repository for the singleton `about_content` document.

use sqlx::PgPool;

use crate::models::about::{AboutContent, AboutContentRow, UpsertAboutContent};

/// Column list for about_content queries (the fixed row key stays
/// internal).
const COLUMNS: &str = "title, vision_title, vision_content, values_title, values_items, \
     greetings_title, greetings_desc, logo, logo_align, timeline";

/// Storage for the about-page document. The table holds at most one row.
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the about document. `None` until the first save.
    pub async fn get(pool: &PgPool) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content WHERE id = 1");
        let row = sqlx::query_as::<_, AboutContentRow>(&query)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(AboutContent::from))
    }

    /// Insert or fully replace the about document.
    pub async fn set(
        pool: &PgPool,
        input: &UpsertAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO about_content \
                 (id, title, vision_title, vision_content, values_title, values_items, \
                  greetings_title, greetings_desc, logo, logo_align, timeline) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
                 title = EXCLUDED.title, \
                 vision_title = EXCLUDED.vision_title, \
                 vision_content = EXCLUDED.vision_content, \
                 values_title = EXCLUDED.values_title, \
                 values_items = EXCLUDED.values_items, \
                 greetings_title = EXCLUDED.greetings_title, \
                 greetings_desc = EXCLUDED.greetings_desc, \
                 logo = EXCLUDED.logo, \
                 logo_align = EXCLUDED.logo_align, \
                 timeline = EXCLUDED.timeline \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, AboutContentRow>(&query)
            .bind(&input.title)
            .bind(&input.vision_title)
            .bind(&input.vision_content)
            .bind(&input.values_title)
            .bind(&input.values_items)
            .bind(&input.greetings_title)
            .bind(&input.greetings_desc)
            .bind(&input.logo)
            .bind(&input.logo_align)
            .bind(input.timeline.encode())
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }
}
