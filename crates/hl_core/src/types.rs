use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
}

impl BoundingBox {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

// path records where the text came from in the source tree; matching never
// reads it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub text: String,
    #[serde(rename = "box")]
    pub bounds: BoundingBox,
    pub path: String,
}

pub type PathMapping = BTreeMap<String, Option<BoundingBox>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentHash(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingStats {
    pub leaves: i64,
    pub matched: i64,
    pub unmatched: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingArtifact {
    pub mapping: PathMapping,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<PathMapping>,
    pub stats: MappingStats,
    pub source_hash: ContentHash,
    pub payload_hash: ContentHash,
    pub config_hash: ContentHash,
}
