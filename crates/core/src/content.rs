//! Codec for structured content persisted in text columns.
//!
//! Portfolio `details`, portfolio `gallery` and the about-page `timeline`
//! are ordered sequences stored as JSON text in a single column. Reads
//! must stay available over legacy rows that hold malformed text, so
//! decoding never fails:
//!
//! - entry lists (`details`, `timeline`) fall back to the raw stored text,
//! - reference lists (`gallery`) fall back to an empty sequence.
//!
//! The asymmetry is intentional: free-form entry text is still worth
//! showing to an editor, a broken image list is not.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An ordered entry sequence as stored, or the raw column text when the
/// stored value does not parse as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentList<T> {
    Entries(Vec<T>),
    Raw(String),
}

/// Portfolio detail rows. Entries are arbitrary JSON objects produced by
/// the admin editor, so no fixed field set is imposed.
pub type Details = ContentList<serde_json::Value>;

/// Company-history timeline on the about page.
pub type Timeline = ContentList<TimelineEntry>;

/// One milestone on the about-page timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub event: String,
}

impl<T> Default for ContentList<T> {
    fn default() -> Self {
        Self::Entries(Vec::new())
    }
}

impl<T: DeserializeOwned> ContentList<T> {
    /// Decode a stored text column. An absent or empty column is an empty
    /// sequence; text that does not parse as an entry list is kept raw.
    pub fn decode(stored: Option<&str>) -> Self {
        let Some(text) = stored else {
            return Self::default();
        };
        if text.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Vec<T>>(text) {
            Ok(entries) => Self::Entries(entries),
            Err(_) => Self::Raw(text.to_owned()),
        }
    }
}

impl<T: Serialize> ContentList<T> {
    /// Encode for storage. Raw text is written back verbatim so a
    /// read-modify-write cycle never mangles legacy data.
    pub fn encode(&self) -> String {
        match self {
            Self::Entries(entries) => {
                serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_owned())
            }
            Self::Raw(text) => text.clone(),
        }
    }
}

/// Decode a stored gallery column into image references.
///
/// Absent, empty or malformed text all decode to an empty sequence.
pub fn decode_gallery(stored: Option<&str>) -> Vec<String> {
    let Some(text) = stored else {
        return Vec::new();
    };
    serde_json::from_str::<Vec<String>>(text).unwrap_or_default()
}

/// Encode a gallery for storage. An absent gallery is stored as NULL, an
/// empty one as `[]`.
pub fn encode_gallery(gallery: Option<&[String]>) -> Option<String> {
    gallery.map(|refs| serde_json::to_string(refs).unwrap_or_else(|_| "[]".to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_round_trip_preserves_order() {
        let details = Details::Entries(vec![
            serde_json::json!({"k": "v"}),
            serde_json::json!({"second": 2}),
        ]);
        let stored = details.encode();
        assert_eq!(Details::decode(Some(&stored)), details);
    }

    #[test]
    fn absent_details_decode_to_empty_entries() {
        assert_eq!(Details::decode(None), Details::Entries(vec![]));
        assert_eq!(Details::decode(Some("")), Details::Entries(vec![]));
    }

    #[test]
    fn malformed_details_fall_back_to_raw_text() {
        let decoded = Details::decode(Some("not json at all"));
        assert_eq!(decoded, Details::Raw("not json at all".to_owned()));
    }

    #[test]
    fn raw_details_encode_verbatim() {
        let raw = Details::Raw("legacy free text".to_owned());
        assert_eq!(raw.encode(), "legacy free text");
    }

    #[test]
    fn details_accept_plain_string_payloads() {
        let decoded: Details = serde_json::from_value(serde_json::json!("free text")).unwrap();
        assert_eq!(decoded, Details::Raw("free text".to_owned()));
    }

    #[test]
    fn gallery_decodes_refs_in_order() {
        let stored = r#"["/g1.png","/g2.png"]"#;
        assert_eq!(decode_gallery(Some(stored)), vec!["/g1.png", "/g2.png"]);
    }

    #[test]
    fn malformed_gallery_falls_back_to_empty() {
        assert_eq!(decode_gallery(Some("{broken")), Vec::<String>::new());
        assert_eq!(decode_gallery(None), Vec::<String>::new());
    }

    #[test]
    fn absent_gallery_encodes_to_null() {
        assert_eq!(encode_gallery(None), None);
        assert_eq!(encode_gallery(Some(&[])), Some("[]".to_owned()));
    }

    #[test]
    fn timeline_entries_are_typed() {
        let stored = r#"[{"year":"2003","event":"Founded"}]"#;
        let decoded = Timeline::decode(Some(stored));
        assert_eq!(
            decoded,
            Timeline::Entries(vec![TimelineEntry {
                year: "2003".to_owned(),
                event: "Founded".to_owned(),
            }])
        );
    }
}
