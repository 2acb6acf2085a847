//! Notice board model.

use serde::{Deserialize, Serialize};
use sitekit_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `notices` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notice {
    pub id: DbId,
    pub title: String,
    /// Opaque HTML produced by the rich-text editor.
    pub content: String,
    pub author: String,
    pub date: Timestamp,
    /// Incremented by one on each single-item fetch; never decremented.
    pub views: i64,
}

/// DTO for creating or replacing a notice. `date` and `views` are owned
/// by the store.
#[derive(Debug, Deserialize)]
pub struct UpsertNotice {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}
