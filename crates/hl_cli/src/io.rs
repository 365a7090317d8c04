use hl_core::app_error::{AppError, AppResult};
use serde_json::Value;
use std::fs;

pub fn read_json_file(path: &str) -> AppResult<Value> {
    let bytes = fs::read(path).map_err(|e| {
        AppError::new(
            "HL_IO_READ_FAILED",
            "io",
            "failed reading input file",
            false,
            serde_json::json!({ "error": e.to_string(), "path": path }),
        )
    })?;
    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::new(
            "HL_JSON_PARSE_FAILED",
            "io",
            "input file is not valid json",
            false,
            serde_json::json!({ "error": e.to_string(), "path": path }),
        )
    })
}
