use hl_core::app_error::{AppError, AppResult};
use hl_core::geometry::normalize_box;
use hl_core::types::{BoundingBox, SourceEntry};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

const BOX_FIELD_KEYS: &[&str] = &["bbox", "box", "region", "bounding_box"];
const TEXT_FIELD_KEYS: &[&str] = &["text", "value", "content"];
const WORD_LIST_KEYS: &[&str] = &["words", "tokens"];

/// Schema-agnostic extraction: visits every object and array, surfacing any
/// node that pairs text with usable geometry. Runs when the source tree does
/// not match the known document shape.
pub fn walk_generic(tree: &Value, max_depth: usize) -> AppResult<Vec<SourceEntry>> {
    let mut entries = Vec::new();
    visit(tree, "$", 0, max_depth, &mut entries)?;
    Ok(entries)
}

/// Geometry of a raw field: either a box-like value directly, or a list of
/// box-likes whose first element is the field's own box.
pub fn box_from_field(raw: &Value) -> Option<BoundingBox> {
    if let Some(bounds) = normalize_box(raw, None) {
        return Some(bounds);
    }
    match raw {
        Value::Array(items) => items.first().and_then(|first| normalize_box(first, None)),
        _ => None,
    }
}

/// Scalar leaves become matchable text; containers and null do not.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn visit(
    node: &Value,
    path: &str,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<SourceEntry>,
) -> AppResult<()> {
    if depth > max_depth {
        return Err(AppError::new(
            "HL_TRAVERSAL_DEPTH_EXCEEDED",
            "traversal",
            "source tree exceeds maximum depth",
            false,
            serde_json::json!({ "path": path, "max_depth": max_depth }),
        ));
    }

    match node {
        Value::Array(items) => {
            if let Some(entry) = tuple_entry(items, path) {
                out.push(entry);
                return Ok(());
            }
            for (idx, item) in items.iter().enumerate() {
                visit(item, &format!("{path}.[{idx}]"), depth + 1, max_depth, out)?;
            }
        }
        Value::Object(map) => {
            let mut consumed = BTreeSet::new();
            emit_word_entries(map, path, out, &mut consumed);
            if let Some(entry) = boxed_text_entry(map, path, &mut consumed) {
                out.push(entry);
            }
            for (key, value) in map {
                if consumed.contains(key.as_str()) {
                    continue;
                }
                visit(value, &format!("{path}.{key}"), depth + 1, max_depth, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

// [value, box-like] pairs, e.g. ["INV-001", [10, 20, 110, 40]]
fn tuple_entry(items: &[Value], path: &str) -> Option<SourceEntry> {
    if items.len() != 2 {
        return None;
    }
    let text = scalar_text(&items[0])?;
    let bounds = box_from_field(&items[1])?;
    Some(SourceEntry { text, bounds, path: path.to_string() })
}

// containers with a words/tokens array of {text|value, bbox} pairs
fn emit_word_entries(
    map: &Map<String, Value>,
    path: &str,
    out: &mut Vec<SourceEntry>,
    consumed: &mut BTreeSet<&'static str>,
) {
    for list_key in WORD_LIST_KEYS {
        let Some(Value::Array(words)) = map.get(*list_key) else {
            continue;
        };
        consumed.insert(*list_key);
        for (idx, word) in words.iter().enumerate() {
            let Value::Object(fields) = word else {
                continue;
            };
            let text = TEXT_FIELD_KEYS.iter().find_map(|k| fields.get(*k).and_then(scalar_text));
            let bounds = BOX_FIELD_KEYS.iter().find_map(|k| fields.get(*k).and_then(box_from_field));
            if let (Some(text), Some(bounds)) = (text, bounds) {
                out.push(SourceEntry {
                    text,
                    bounds,
                    path: format!("{path}.{list_key}.[{idx}]"),
                });
            }
        }
    }
}

// objects carrying an explicit box-like field next to a text-like sibling
fn boxed_text_entry(
    map: &Map<String, Value>,
    path: &str,
    consumed: &mut BTreeSet<&'static str>,
) -> Option<SourceEntry> {
    let (box_key, bounds) = BOX_FIELD_KEYS
        .iter()
        .find_map(|k| map.get(*k).and_then(box_from_field).map(|b| (*k, b)))?;
    let (text_key, text) = TEXT_FIELD_KEYS
        .iter()
        .find_map(|k| map.get(*k).and_then(scalar_text).map(|t| (*k, t)))?;

    consumed.insert(box_key);
    consumed.insert(text_key);
    Some(SourceEntry { text, bounds, path: path.to_string() })
}
