use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

// The known extracted-document shape. Deserialization failure of any part
// drops the whole tree to the generic walker, so these types stay strict.

#[derive(Debug, Deserialize)]
pub struct ExtractedDocument {
    pub document: DocumentBlock,
}

#[derive(Debug, Deserialize)]
pub struct DocumentBlock {
    #[serde(default)]
    pub metadata: BTreeMap<String, FieldLeaf>,
    #[serde(default)]
    pub vendor: BTreeMap<String, FieldLeaf>,
    #[serde(default)]
    pub customer: BTreeMap<String, FieldLeaf>,
    #[serde(default)]
    pub items: Vec<ItemRow>,
    #[serde(default)]
    pub other_information: Vec<OtherField>,
}

/// A leaf field: one extracted value plus the region list that produced it.
/// The first region is the field's own box; later regions are multi-line
/// spans left to box aggregation.
#[derive(Debug, Deserialize)]
pub struct FieldLeaf {
    pub value: Value,
    #[serde(default)]
    pub bounding_box: Value,
}

/// One line item. Geometry is captured once per row; every scalar attribute
/// of the row shares it.
#[derive(Debug, Deserialize)]
pub struct ItemRow {
    #[serde(default)]
    pub bounding_box: Value,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct OtherField {
    #[serde(default)]
    pub label: Option<String>,
    pub value: Value,
    #[serde(default)]
    pub bounding_box: Value,
}
