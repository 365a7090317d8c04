use crate::app_error::AppResult;
use crate::types::SourceEntry;
use serde_json::Value;

/// Extraction seam between the source tree and the matcher. The tree arrives
/// already deserialized; implementations walk it and surface every piece of
/// text that carries usable geometry.
pub trait SourceExtractService: Send + Sync {
    fn extract_entries(&self, source_tree: &Value) -> AppResult<Vec<SourceEntry>>;
}
