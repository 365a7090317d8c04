use hl_core::config::MatchConfigV1;
use jsonschema::validator_for;
use serde_json::json;

fn mapping_artifact_schema() -> serde_json::Value {
    json!({
      "$schema": "https://json-schema.org/draft/2020-12/schema",
      "$id": "hl://schemas/mapping-artifact/v1",
      "type": "object",
      "required": ["mapping", "stats", "source_hash", "payload_hash", "config_hash"],
      "properties": {
        "mapping": {
          "type": "object",
          "additionalProperties": {
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
          }
        },
        "groups": { "type": "object" },
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

#[test]
fn schema_mapping_artifact_accepts_real_output() {
    let source = json!({
        "document": {
            "metadata": {
                "purchase_order_no": { "value": "INV-2024-001", "bounding_box": [[10, 20, 110, 40, 1]] }
            }
        }
    });
    let payload = json!({ "PurchaseOrderByCustomer": "INV-2024-001", "Unmatched": "zzz" });

    let artifact = hl_match::map_document(&source, &payload, &MatchConfigV1::default_v1(), true)
        .expect("map");
    let value = serde_json::to_value(artifact).expect("serialize artifact");

    let schema = validator_for(&mapping_artifact_schema()).expect("compile artifact schema");
    assert!(schema.is_valid(&value));
}

#[test]
fn schema_mapping_artifact_rejects_degenerate_box() {
    let schema = validator_for(&mapping_artifact_schema()).expect("compile artifact schema");
    let invalid = json!({
      "mapping": { "$.a": { "x": 0, "y": 0, "width": 0, "height": 4 } },
      "stats": { "leaves": 1, "matched": 1, "unmatched": 0 },
      "source_hash": "blake3:0000000000000000000000000000000000000000000000000000000000000000",
      "payload_hash": "blake3:0000000000000000000000000000000000000000000000000000000000000000",
      "config_hash": "blake3:0000000000000000000000000000000000000000000000000000000000000000"
    });
    assert!(!schema.is_valid(&invalid));
}
