use crate::io::read_json_file;
use hl_core::app_error::{AppError, AppResult};
use hl_core::config::MatchConfigV1;
use hl_core::services::SourceExtractService;
use hl_extract::DefaultExtractor;

pub fn run_extract(source_path: &str) -> AppResult<()> {
    let tree = read_json_file(source_path)?;
    let cfg = MatchConfigV1::default_v1();
    let entries = DefaultExtractor::new(cfg.max_depth).extract_entries(&tree)?;
    let rendered = serde_json::to_string_pretty(&entries)
        .map_err(|e| AppError::internal(&format!("entry encoding failed: {e}")))?;
    println!("{rendered}");
    Ok(())
}
