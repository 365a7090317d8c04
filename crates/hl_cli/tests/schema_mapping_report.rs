use hl_cli::verifier::{CheckedCounts, MappingReportV1, VerifyErrorEntry};
use jsonschema::validator_for;
use serde_json::json;

fn mapping_report_schema() -> serde_json::Value {
    json!({
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "$id": "hl://schemas/mapping-report/v1",
      "type": "object",
      "required": [
        "report_version",
        "status",
        "exit_code",
        "errors",
        "checked"
      ],
      "properties": {
        "report_version": { "const": 1 },
        "status": { "type": "string", "enum": ["ok", "failed"] },
        "exit_code": { "type": "integer" },
        "errors": {
          "type": "array",
          "items": {
            "type": "object",
            "required": ["code", "path"],
            "properties": {
              "code": { "type": "string" },
              "path": { "type": "string" },
              "expected": { "type": ["string", "null"] },
              "actual": { "type": ["string", "null"] }
            },
            "additionalProperties": false
          }
        },
        "checked": {
          "type": "object",
          "required": ["paths", "boxes"],
          "properties": {
            "paths": { "type": "integer" },
            "boxes": { "type": "integer" }
          },
          "additionalProperties": false
        }
      },
      "additionalProperties": false
    })
}

#[test]
fn schema_mapping_report_accepts_valid_payload() {
    let schema = validator_for(&mapping_report_schema()).expect("compile report schema");
    let report = MappingReportV1 {
        report_version: 1,
        status: "failed".to_string(),
        exit_code: 30,
        errors: vec![VerifyErrorEntry {
            code: "STATS_MISMATCH".to_string(),
            path: "stats".to_string(),
            expected: Some("leaves=2 matched=1 unmatched=1".to_string()),
            actual: Some("leaves=2 matched=2 unmatched=0".to_string()),
        }],
        checked: CheckedCounts { paths: 2, boxes: 1 },
    };

    let value = serde_json::to_value(report).expect("serialize report");
    assert!(schema.is_valid(&value));
}

#[test]
fn schema_mapping_report_rejects_missing_checked() {
    let schema = validator_for(&mapping_report_schema()).expect("compile report schema");
    let invalid = json!({
      "report_version": 1,
      "status": "failed",
      "exit_code": 30,
      "errors": []
    });

    assert!(!schema.is_valid(&invalid));
}
