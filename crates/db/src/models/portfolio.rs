//! Portfolio catalog model.
//!
//! `details` and `gallery` live in text columns; the row struct carries
//! them as stored and [`PortfolioItem`] decodes them through the lenient
//! codec in `sitekit_core::content`.

use serde::{Deserialize, Serialize};
use sitekit_core::content::{self, Details};
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `portfolio_items` table, content columns undecoded.
#[derive(Debug, Clone, FromRow)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub title: String,
    pub period: String,
    pub role: String,
    pub overview: String,
    pub details: String,
    pub client: String,
    pub image: String,
    pub category: String,
    pub gallery: Option<String>,
    pub size: Option<String>,
    pub youtube_link: Option<String>,
}

/// A portfolio item with its content fields decoded.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioItem {
    pub id: Uuid,
    pub title: String,
    pub period: String,
    pub role: String,
    pub overview: String,
    pub details: Details,
    pub client: String,
    pub image: String,
    pub category: String,
    pub gallery: Vec<String>,
    pub size: Option<String>,
    pub youtube_link: Option<String>,
}

impl From<PortfolioRow> for PortfolioItem {
    fn from(row: PortfolioRow) -> Self {
        Self {
            details: Details::decode(Some(&row.details)),
            gallery: content::decode_gallery(row.gallery.as_deref()),
            id: row.id,
            title: row.title,
            period: row.period,
            role: row.role,
            overview: row.overview,
            client: row.client,
            image: row.image,
            category: row.category,
            size: row.size,
            youtube_link: row.youtube_link,
        }
    }
}

/// DTO for creating or replacing a portfolio item. Updates replace every
/// mutable field; an omitted `gallery` is stored as NULL and reads back
/// as an empty sequence.
#[derive(Debug, Deserialize)]
pub struct UpsertPortfolioItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub size: Option<String>,
    pub youtube_link: Option<String>,
    #[serde(default)]
    pub details: Details,
    pub gallery: Option<Vec<String>>,
}
