//! Download category model.

use serde::{Deserialize, Serialize};
use sitekit_core::types::DbId;
use sqlx::FromRow;

/// A row from the `download_categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    /// Unique among categories, compared case-sensitively.
    pub name: String,
}

/// DTO for adding or renaming a category.
#[derive(Debug, Deserialize)]
pub struct UpsertCategory {
    pub name: String,
}
