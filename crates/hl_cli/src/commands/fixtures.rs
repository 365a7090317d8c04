use hl_core::app_error::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

fn write_fixture(path: PathBuf, content: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::new(
                "HL_INTERNAL_ERROR",
                "fixtures",
                "failed creating fixture directory",
                false,
                serde_json::json!({ "error": e.to_string(), "path": parent }),
            )
        })?;
    }
    fs::write(&path, content).map_err(|e| {
        AppError::new(
            "HL_INTERNAL_ERROR",
            "fixtures",
            "failed writing fixture file",
            false,
            serde_json::json!({ "error": e.to_string(), "path": path }),
        )
    })
}

/// Writes a sample invoice source/payload pair used by tests and benches.
pub fn generate_fixtures(out_dir: &str) -> AppResult<PathBuf> {
    let root = PathBuf::from(out_dir);

    write_fixture(
        root.join("source.json"),
        br#"{
  "document": {
    "metadata": {
      "purchase_order_no": { "value": "INV-2024-001", "bounding_box": [[10, 20, 110, 40, 1]] },
      "invoice_date": { "value": "2024-01-05T00:00:00", "bounding_box": [[10, 50, 90, 66, 1]] },
      "currency": { "value": "EUR", "bounding_box": [[420, 50, 450, 66, 1]] }
    },
    "vendor": {
      "name": { "value": "ACME   Corp", "bounding_box": [[10, 90, 140, 108, 1]] },
      "tax_id": { "value": "DE 123/456/789", "bounding_box": [[10, 112, 130, 128, 1]] }
    },
    "customer": {
      "name": { "value": "Globex GmbH", "bounding_box": [[300, 90, 420, 108, 1]] }
    },
    "items": [
      {
        "bounding_box": [[10, 200, 500, 220, 1]],
        "description": "Widget A",
        "quantity": 4,
        "unit_price": "12.50",
        "total": "50.00"
      },
      {
        "bounding_box": [[10, 224, 500, 244, 1]],
        "description": "Widget B",
        "quantity": 2,
        "unit_price": "30.00",
        "total": "60.00"
      }
    ],
    "other_information": [
      { "label": "payment_terms", "value": "Net 30", "bounding_box": [[10, 300, 80, 316, 2]] }
    ]
  }
}
"#,
    )?;

    write_fixture(
        root.join("payload.json"),
        br#"{
  "PurchaseOrderByCustomer": "INV-2024-001",
  "DocumentDate": "2024-01-05",
  "TransactionCurrency": "EUR",
  "SoldToParty": { "Name": "acme corp", "TaxNumber": "DE123456789" },
  "to_Item": [
    { "Material": "Widget A", "Quantity": 4, "NetAmount": "50.00" },
    { "Material": "Widget B", "Quantity": 2, "NetAmount": "60.00" }
  ],
  "PaymentTerms": "Net 30"
}
"#,
    )?;

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::generate_fixtures;

    #[test]
    fn fixtures_generate_creates_expected_files() {
        let out = std::env::temp_dir().join(format!("hl_fixtures_{}", std::process::id()));
        let root = generate_fixtures(&out.to_string_lossy()).expect("generate fixtures");
        assert!(root.join("source.json").exists());
        assert!(root.join("payload.json").exists());
    }
}
