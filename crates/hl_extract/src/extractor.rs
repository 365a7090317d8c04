use crate::document::{ExtractedDocument, FieldLeaf};
use crate::walker::{box_from_field, scalar_text, walk_generic};
use hl_core::app_error::AppResult;
use hl_core::services::SourceExtractService;
use hl_core::types::SourceEntry;
use serde_json::Value;
use std::collections::BTreeMap;

/// The unified source indexer: a schema-aware fast path over the known
/// extracted-document shape, falling back to the generic walker when the
/// tree does not deserialize into it. Only one strategy ever runs per input.
pub struct DefaultExtractor {
    max_depth: usize,
}

impl DefaultExtractor {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

impl SourceExtractService for DefaultExtractor {
    fn extract_entries(&self, source_tree: &Value) -> AppResult<Vec<SourceEntry>> {
        match serde_json::from_value::<ExtractedDocument>(source_tree.clone()) {
            Ok(doc) => Ok(extract_known_shape(&doc)),
            Err(_) => walk_generic(source_tree, self.max_depth),
        }
    }
}

fn extract_known_shape(doc: &ExtractedDocument) -> Vec<SourceEntry> {
    let mut entries = Vec::new();

    let groups: [(&str, &BTreeMap<String, FieldLeaf>); 3] = [
        ("metadata", &doc.document.metadata),
        ("vendor", &doc.document.vendor),
        ("customer", &doc.document.customer),
    ];
    for (group, fields) in groups {
        for (name, leaf) in fields {
            push_leaf(&mut entries, leaf, format!("document.{group}.{name}"));
        }
    }

    for (idx, item) in doc.document.items.iter().enumerate() {
        // one box per row; every cell of the row shares it
        let Some(row_bounds) = box_from_field(&item.bounding_box) else {
            continue;
        };
        for (attr, value) in &item.attributes {
            if let Some(text) = scalar_text(value) {
                entries.push(SourceEntry {
                    text,
                    bounds: row_bounds,
                    path: format!("document.items.[{idx}].{attr}"),
                });
            }
        }
    }

    for (idx, field) in doc.document.other_information.iter().enumerate() {
        if let (Some(text), Some(bounds)) = (scalar_text(&field.value), box_from_field(&field.bounding_box)) {
            let path = match &field.label {
                Some(label) => format!("document.other_information.[{idx}].{label}"),
                None => format!("document.other_information.[{idx}]"),
            };
            entries.push(SourceEntry { text, bounds, path });
        }
    }

    entries
}

fn push_leaf(entries: &mut Vec<SourceEntry>, leaf: &FieldLeaf, path: String) {
    if let (Some(text), Some(bounds)) = (scalar_text(&leaf.value), box_from_field(&leaf.bounding_box)) {
        entries.push(SourceEntry { text, bounds, path });
    }
}
