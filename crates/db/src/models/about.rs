//! About-page content: a single editable document.
//!
//! The `timeline` column holds an encoded entry list and goes through
//! the same lenient codec as portfolio `details`.

use serde::{Deserialize, Serialize};
use sitekit_core::content::Timeline;
use sqlx::FromRow;

/// The `about_content` row, timeline undecoded.
#[derive(Debug, Clone, FromRow)]
pub struct AboutContentRow {
    pub title: String,
    pub vision_title: String,
    pub vision_content: String,
    pub values_title: String,
    pub values_items: String,
    pub greetings_title: String,
    pub greetings_desc: String,
    pub logo: String,
    pub logo_align: String,
    pub timeline: Option<String>,
}

/// The about document with its timeline decoded.
#[derive(Debug, Clone, Serialize)]
pub struct AboutContent {
    pub title: String,
    pub vision_title: String,
    /// Opaque HTML produced by the rich-text editor.
    pub vision_content: String,
    pub values_title: String,
    pub values_items: String,
    pub greetings_title: String,
    pub greetings_desc: String,
    pub logo: String,
    pub logo_align: String,
    pub timeline: Timeline,
}

impl From<AboutContentRow> for AboutContent {
    fn from(row: AboutContentRow) -> Self {
        Self {
            timeline: Timeline::decode(row.timeline.as_deref()),
            title: row.title,
            vision_title: row.vision_title,
            vision_content: row.vision_content,
            values_title: row.values_title,
            values_items: row.values_items,
            greetings_title: row.greetings_title,
            greetings_desc: row.greetings_desc,
            logo: row.logo,
            logo_align: row.logo_align,
        }
    }
}

/// DTO for replacing the about document as a whole.
#[derive(Debug, Deserialize)]
pub struct UpsertAboutContent {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub vision_title: String,
    #[serde(default)]
    pub vision_content: String,
    #[serde(default)]
    pub values_title: String,
    #[serde(default)]
    pub values_items: String,
    #[serde(default)]
    pub greetings_title: String,
    #[serde(default)]
    pub greetings_desc: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default = "default_logo_align")]
    pub logo_align: String,
    #[serde(default)]
    pub timeline: Timeline,
}

fn default_logo_align() -> String {
    "left".to_owned()
}
