//! Downloads catalog model.

use serde::{Deserialize, Serialize};
use sitekit_core::types::Timestamp;
use sqlx::FromRow;
use uuid::Uuid;

/// A row from the `downloads` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DownloadItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Category name; must reference an existing download category. The
    /// reference is enforced by the handlers, not by the schema.
    pub category: String,
    pub file_url: String,
    /// Set at creation, never updated.
    pub created_at: Timestamp,
}

/// DTO for creating or replacing a download item. `created_at` is not a
/// mutable field and is absent here.
#[derive(Debug, Deserialize)]
pub struct UpsertDownloadItem {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub file_url: String,
}
