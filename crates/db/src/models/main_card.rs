//! Main-page card strip model.

use serde::{Deserialize, Serialize};
use sitekit_core::types::DbId;
use sqlx::FromRow;

/// A row from the `main_cards` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MainCard {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub link: String,
    /// Opaque icon markup (inline SVG or an emoji).
    pub icon: String,
}

/// DTO for one card in a bulk replace.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMainCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub icon: String,
}
