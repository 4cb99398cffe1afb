use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One uploaded video as returned by the ingestion step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVideo {
    #[serde(rename = "videoId")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub published_at: String,
    #[serde(default)]
    pub thumbnails: BTreeMap<String, Thumbnail>,
}

/// Read a text field that may be absent, `null` or a string; the first two become `""`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Basic => write!(f, "basic"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

/// Result of scoring one text against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMatch {
    pub category: String,
    pub score: u32,
    pub tags: Vec<String>,
}

/// A [`RawVideo`] annotated with its category, difficulty and tags.
///
/// Serialized flat: the raw fields sit next to the annotations, which is the
/// layout of the full `videos.json` artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedVideo {
    #[serde(flatten)]
    pub video: RawVideo,
    pub category: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    /// Reserved; always empty for now.
    pub metrics: BTreeMap<String, serde_json::Value>,
    /// Reserved; always empty for now.
    pub scores: BTreeMap<String, serde_json::Value>,
}

/// Reduced projection written to the minified artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifiedVideo {
    #[serde(rename = "videoId")]
    pub id: String,
    pub title: String,
    pub published_at: String,
    pub thumbnail: Option<String>,
    pub category: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
}
