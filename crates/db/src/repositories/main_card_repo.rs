//! Repository for the `main_cards` table.
//!
//! The card strip is only ever written as a whole, so the write surface
//! is a single transactional replace.

use sqlx::PgPool;

use crate::models::main_card::{CreateMainCard, MainCard};

/// Column list for main_cards queries.
const COLUMNS: &str = "id, title, description, link, icon";

/// Storage for the main-page card strip.
pub struct MainCardRepo;

impl MainCardRepo {
    /// List all cards, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<MainCard>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM main_cards ORDER BY id ASC");
        sqlx::query_as::<_, MainCard>(&query).fetch_all(pool).await
    }

    /// Replace the whole collection with the given cards, in order, in
    /// one transaction.
    pub async fn replace_all(
        pool: &PgPool,
        cards: &[CreateMainCard],
    ) -> Result<Vec<MainCard>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM main_cards").execute(&mut *tx).await?;

        let insert_query = format!(
            "INSERT INTO main_cards (title, description, link, icon) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(cards.len());
        for card in cards {
            let row = sqlx::query_as::<_, MainCard>(&insert_query)
                .bind(&card.title)
                .bind(&card.description)
                .bind(&card.link)
                .bind(&card.icon)
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
