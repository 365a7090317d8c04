use crate::io::read_json_file;
use hl_core::app_error::AppResult;
use hl_core::hashing::validate_blake3_prefixed;
use hl_core::types::MappingArtifact;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingReportV1 {
    pub report_version: i64,
    pub status: String,
    pub exit_code: i64,
    pub errors: Vec<VerifyErrorEntry>,
    pub checked: CheckedCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyErrorEntry {
    pub code: String,
    pub path: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckedCounts {
    pub paths: i64,
    pub boxes: i64,
}

fn report_for(exit_code: i64, mut errors: Vec<VerifyErrorEntry>, checked: CheckedCounts) -> (i64, MappingReportV1) {
    errors.sort_by(|a, b| a.code.cmp(&b.code).then(a.path.cmp(&b.path)));
    let status = if exit_code == 0 { "ok" } else { "failed" };
    (
        exit_code,
        MappingReportV1 {
            report_version: 1,
            status: status.to_string(),
            exit_code,
            errors,
            checked,
        },
    )
}

fn bounding_box_schema() -> Value {
    serde_json::json!({
      "type": ["object", "null"],
      "required": ["x", "y", "width", "height"],
      "properties": {
        "x": { "type": "number" },
        "y": { "type": "number" },
        "width": { "type": "number", "exclusiveMinimum": 0 },
        "height": { "type": "number", "exclusiveMinimum": 0 },
        "page": { "type": "integer" }
      },
      "additionalProperties": false
    })
}

fn mapping_artifact_schema() -> Value {
    serde_json::json!({
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "$id": "hl://schemas/mapping-artifact/v1",
      "type": "object",
      "required": ["mapping", "stats", "source_hash", "payload_hash", "config_hash"],
      "properties": {
        "mapping": {
          "type": "object",
          "additionalProperties": bounding_box_schema()
        },
        "groups": {
          "type": "object",
          "additionalProperties": bounding_box_schema()
        },
        "stats": {
          "type": "object",
          "required": ["leaves", "matched", "unmatched"],
          "properties": {
            "leaves": { "type": "integer", "minimum": 0 },
            "matched": { "type": "integer", "minimum": 0 },
            "unmatched": { "type": "integer", "minimum": 0 }
          },
          "additionalProperties": false
        },
        "source_hash": { "type": "string", "pattern": "^blake3:[0-9a-f]{64}$" },
        "payload_hash": { "type": "string", "pattern": "^blake3:[0-9a-f]{64}$" },
        "config_hash": { "type": "string", "pattern": "^blake3:[0-9a-f]{64}$" }
      },
      "additionalProperties": false
    })
}

/// Validates a mapping artifact file: schema conformance, hash format, and
/// stats consistency. Returns the exit code and a report with
/// deterministically ordered errors.
pub fn verify_mapping_file(mapping_path: &str) -> AppResult<(i64, MappingReportV1)> {
    let value = read_json_file(mapping_path)?;
    let mut errors = Vec::new();

    let schema = mapping_artifact_schema();
    let validator = match jsonschema::validator_for(&schema) {
        Ok(v) => v,
        Err(e) => {
            return Ok(report_for(
                60,
                vec![VerifyErrorEntry {
                    code: "INTERNAL_ERROR".to_string(),
                    path: "schema".to_string(),
                    expected: None,
                    actual: Some(e.to_string()),
                }],
                CheckedCounts { paths: 0, boxes: 0 },
            ));
        }
    };

    for error in validator.iter_errors(&value) {
        errors.push(VerifyErrorEntry {
            code: "SCHEMA_VALIDATION_FAILED".to_string(),
            path: error.instance_path.to_string(),
            expected: None,
            actual: Some(error.to_string()),
        });
    }
    if !errors.is_empty() {
        return Ok(report_for(30, errors, CheckedCounts { paths: 0, boxes: 0 }));
    }

    let artifact: MappingArtifact = match serde_json::from_value(value) {
        Ok(a) => a,
        Err(e) => {
            return Ok(report_for(
                30,
                vec![VerifyErrorEntry {
                    code: "ARTIFACT_DECODE_FAILED".to_string(),
                    path: mapping_path.to_string(),
                    expected: None,
                    actual: Some(e.to_string()),
                }],
                CheckedCounts { paths: 0, boxes: 0 },
            ));
        }
    };

    for (field, hash) in [
        ("source_hash", &artifact.source_hash),
        ("payload_hash", &artifact.payload_hash),
        ("config_hash", &artifact.config_hash),
    ] {
        if let Err(err) = validate_blake3_prefixed(&hash.0) {
            errors.push(VerifyErrorEntry {
                code: "HASH_FORMAT_INVALID".to_string(),
                path: field.to_string(),
                expected: Some("blake3:<64 lowercase hex>".to_string()),
                actual: Some(err.message),
            });
        }
    }

    let paths = artifact.mapping.len() as i64;
    let matched = artifact.mapping.values().filter(|b| b.is_some()).count() as i64;
    if artifact.stats.leaves != paths || artifact.stats.matched != matched
        || artifact.stats.unmatched != paths - matched
    {
        errors.push(VerifyErrorEntry {
            code: "STATS_MISMATCH".to_string(),
            path: "stats".to_string(),
            expected: Some(format!("leaves={paths} matched={matched} unmatched={}", paths - matched)),
            actual: Some(format!(
                "leaves={} matched={} unmatched={}",
                artifact.stats.leaves, artifact.stats.matched, artifact.stats.unmatched
            )),
        });
    }

    let exit_code = if errors.is_empty() { 0 } else { 30 };
    Ok(report_for(exit_code, errors, CheckedCounts { paths, boxes: matched }))
}
