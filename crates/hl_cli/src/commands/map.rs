use crate::io::read_json_file;
use hl_core::app_error::{AppError, AppResult};
use hl_core::config::MatchConfigV1;
use hl_match::map_document;

pub fn run_map(source_path: &str, payload_path: &str, groups: bool, pretty: bool) -> AppResult<()> {
    let source = read_json_file(source_path)?;
    let payload = read_json_file(payload_path)?;
    let cfg = MatchConfigV1::default_v1();

    let artifact = map_document(&source, &payload, &cfg, groups)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&artifact)
    } else {
        serde_json::to_string(&artifact)
    }
    .map_err(|e| AppError::internal(&format!("artifact encoding failed: {e}")))?;
    println!("{rendered}");
    Ok(())
}
