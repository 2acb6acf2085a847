//! Page-section model: the admin-editable header block keyed by page name.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_sections` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PageSection {
    pub page: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub background_image: String,
}

/// DTO for upserting a page section. There is no partial merge: every
/// field the caller wants retained must be resent.
#[derive(Debug, Deserialize)]
pub struct UpsertPageSection {
    pub title: String,
    pub subtitle: Option<String>,
    #[serde(default)]
    pub background_image: String,
}
