use crate::verifier::{verify_mapping_file, MappingReportV1};
use hl_core::app_error::AppResult;

pub fn run_verify(mapping_path: &str) -> AppResult<(i64, MappingReportV1)> {
    verify_mapping_file(mapping_path)
}
