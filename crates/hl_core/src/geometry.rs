use crate::types::BoundingBox;
use serde_json::{Map, Value};

// Named edge-pair shapes, checked in order. A shape applies only when all
// four of its keys are present, so the x0/x1 and x1/x2 conventions cannot be
// confused with each other.
struct EdgePairShape {
    left: &'static str,
    top: &'static str,
    right: &'static str,
    bottom: &'static str,
}

const EDGE_PAIR_SHAPES: &[EdgePairShape] = &[
    EdgePairShape { left: "x1", top: "y1", right: "x2", bottom: "y2" },
    EdgePairShape { left: "x0", top: "y0", right: "x1", bottom: "y1" },
    EdgePairShape { left: "left", top: "top", right: "right", bottom: "bottom" },
    EdgePairShape { left: "min_x", top: "min_y", right: "max_x", bottom: "max_y" },
    EdgePairShape { left: "minX", top: "minY", right: "maxX", bottom: "maxY" },
    EdgePairShape { left: "xmin", top: "ymin", right: "xmax", bottom: "ymax" },
];

const ORIGIN_X_KEYS: &[&str] = &["x", "left", "x0"];
const ORIGIN_Y_KEYS: &[&str] = &["y", "top", "y0"];
const WIDTH_KEYS: &[&str] = &["width", "w"];
const HEIGHT_KEYS: &[&str] = &["height", "h"];
// second-edge keys used only to derive a missing width/height
const FAR_X_KEYS: &[&str] = &["right", "max_x", "maxX", "xmax", "x2"];
const FAR_Y_KEYS: &[&str] = &["bottom", "max_y", "maxY", "ymax", "y2"];

const PAGE_KEYS: &[&str] = &["page", "page_number", "pageNumber", "page_index", "pageIndex", "page_no"];

/// Normalizes any supported raw geometry encoding into a canonical
/// positive-area rectangle. Edge-pair encodings are tried before origin+size.
/// Returns `None` for anything that does not normalize; never errors. A
/// supplied `page_override` wins over any page value embedded in the raw
/// input.
pub fn normalize_box(raw: &Value, page_override: Option<i64>) -> Option<BoundingBox> {
    let mut bounds = match raw {
        Value::Array(items) => from_edge_array(items),
        Value::Object(map) => from_edge_pair_object(map).or_else(|| from_origin_size_object(map)),
        _ => None,
    }?;

    if let Some(page) = page_override {
        bounds.page = Some(page);
    }
    Some(bounds)
}

fn finite_number(value: &Value) -> Option<f64> {
    let n = value.as_f64()?;
    n.is_finite().then_some(n)
}

fn page_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => {
            let f = n.as_f64()?;
            f.is_finite().then_some(f as i64)
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn edges_to_box(x1: f64, y1: f64, x2: f64, y2: f64, page: Option<i64>) -> Option<BoundingBox> {
    let (x1, x2) = if x2 < x1 { (x2, x1) } else { (x1, x2) };
    let (y1, y2) = if y2 < y1 { (y2, y1) } else { (y1, y2) };
    let width = x2 - x1;
    let height = y2 - y1;
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(BoundingBox { x: x1, y: y1, width, height, page })
}

fn from_edge_array(items: &[Value]) -> Option<BoundingBox> {
    if items.len() < 4 {
        return None;
    }
    let x1 = finite_number(&items[0])?;
    let y1 = finite_number(&items[1])?;
    let x2 = finite_number(&items[2])?;
    let y2 = finite_number(&items[3])?;
    let page = items.get(4).and_then(page_number);
    edges_to_box(x1, y1, x2, y2, page)
}

fn from_edge_pair_object(map: &Map<String, Value>) -> Option<BoundingBox> {
    let shape = EDGE_PAIR_SHAPES.iter().find(|s| {
        map.contains_key(s.left)
            && map.contains_key(s.top)
            && map.contains_key(s.right)
            && map.contains_key(s.bottom)
    })?;

    let x1 = finite_number(map.get(shape.left)?)?;
    let y1 = finite_number(map.get(shape.top)?)?;
    let x2 = finite_number(map.get(shape.right)?)?;
    let y2 = finite_number(map.get(shape.bottom)?)?;
    edges_to_box(x1, y1, x2, y2, embedded_page(map))
}

fn from_origin_size_object(map: &Map<String, Value>) -> Option<BoundingBox> {
    let x = first_present(map, ORIGIN_X_KEYS)?;
    let y = first_present(map, ORIGIN_Y_KEYS)?;

    let width = match first_present(map, WIDTH_KEYS) {
        Some(w) => w,
        None => first_present(map, FAR_X_KEYS)? - x,
    };
    let height = match first_present(map, HEIGHT_KEYS) {
        Some(h) => h,
        None => first_present(map, FAR_Y_KEYS)? - y,
    };

    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(BoundingBox { x, y, width, height, page: embedded_page(map) })
}

fn first_present(map: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|k| map.get(*k).and_then(finite_number))
}

fn embedded_page(map: &Map<String, Value>) -> Option<i64> {
    PAGE_KEYS.iter().find_map(|k| map.get(*k).and_then(page_number))
}
