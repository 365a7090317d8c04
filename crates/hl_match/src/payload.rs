use hl_core::app_error::{AppError, AppResult};
use serde::Serialize;
use serde_json::Value;

pub const ROOT_PATH: &str = "$";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadLeaf {
    pub path: String,
    pub text: String,
}

/// Walks the payload tree and collects every scalar leaf with its path.
/// Objects contribute `.key`, arrays `.[i]`, the root is `$`. JSON null and
/// containers produce no leaf.
pub fn collect_leaves(payload: &Value, max_depth: usize) -> AppResult<Vec<PayloadLeaf>> {
    let mut leaves = Vec::new();
    visit(payload, ROOT_PATH, 0, max_depth, &mut leaves)?;
    Ok(leaves)
}

fn visit(
    node: &Value,
    path: &str,
    depth: usize,
    max_depth: usize,
    out: &mut Vec<PayloadLeaf>,
) -> AppResult<()> {
    if depth > max_depth {
        return Err(AppError::new(
            "HL_TRAVERSAL_DEPTH_EXCEEDED",
            "traversal",
            "payload tree exceeds maximum depth",
            false,
            serde_json::json!({ "path": path, "max_depth": max_depth }),
        ));
    }

    match node {
        Value::Object(map) => {
            for (key, value) in map {
                visit(value, &format!("{path}.{key}"), depth + 1, max_depth, out)?;
            }
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                visit(item, &format!("{path}.[{idx}]"), depth + 1, max_depth, out)?;
            }
        }
        Value::String(s) => out.push(PayloadLeaf { path: path.to_string(), text: s.clone() }),
        Value::Number(n) => out.push(PayloadLeaf { path: path.to_string(), text: n.to_string() }),
        Value::Bool(b) => out.push(PayloadLeaf { path: path.to_string(), text: b.to_string() }),
        Value::Null => {}
    }
    Ok(())
}
