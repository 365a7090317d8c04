use crate::aggregate::PagePolicy;
use crate::app_error::{AppError, AppResult};
use crate::canon_json::hash_canonical;
use crate::types::ContentHash;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfigV1 {
    pub v: i64,
    pub max_depth: usize,
    pub page_policy: PagePolicy,
}

impl MatchConfigV1 {
    pub fn default_v1() -> Self {
        Self {
            v: 1,
            max_depth: 64,
            page_policy: PagePolicy::Majority,
        }
    }
}

pub fn validate_match_config(cfg: &MatchConfigV1) -> AppResult<()> {
    if cfg.v != 1 {
        return Err(AppError::new(
            "HL_CONFIG_INVALID",
            "config",
            "unsupported match config version",
            false,
            serde_json::json!({ "expected": 1, "actual": cfg.v }),
        ));
    }
    if cfg.max_depth == 0 {
        return Err(AppError::new(
            "HL_CONFIG_INVALID",
            "config",
            "max_depth must be at least 1",
            false,
            serde_json::json!({ "actual": cfg.max_depth }),
        ));
    }
    Ok(())
}

pub fn hash_match_config(cfg: &MatchConfigV1) -> AppResult<ContentHash> {
    let value = serde_json::to_value(cfg).map_err(|e| {
        AppError::new(
            "HL_CONFIG_INVALID",
            "config",
            "match config must be serializable",
            false,
            serde_json::json!({ "error": e.to_string() }),
        )
    })?;
    Ok(ContentHash(hash_canonical(&value)?))
}
