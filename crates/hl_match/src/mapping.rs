use crate::index::TextIndex;
use crate::matcher::best_match;
use crate::payload::collect_leaves;
use hl_core::aggregate::{union_boxes_with_policy, PagePolicy};
use hl_core::app_error::AppResult;
use hl_core::canon_json::hash_canonical;
use hl_core::config::{hash_match_config, validate_match_config, MatchConfigV1};
use hl_core::services::SourceExtractService;
use hl_core::types::{BoundingBox, ContentHash, MappingArtifact, MappingStats, PathMapping};
use hl_extract::DefaultExtractor;
use serde_json::Value;
use std::collections::BTreeMap;

/// Maps every payload leaf path to a bounding box or `None`. This is the
/// advisory boundary: any internal failure collapses the whole result to an
/// empty mapping rather than a partially-filled one.
pub fn create_mapping(payload: &Value, index: &TextIndex, cfg: &MatchConfigV1) -> PathMapping {
    create_mapping_checked(payload, index, cfg).unwrap_or_default()
}

/// Same computation with the failure surfaced, for callers that want to know
/// why a mapping came back empty.
pub fn create_mapping_checked(
    payload: &Value,
    index: &TextIndex,
    cfg: &MatchConfigV1,
) -> AppResult<PathMapping> {
    validate_match_config(cfg)?;
    let mut mapping = PathMapping::new();
    for leaf in collect_leaves(payload, cfg.max_depth)? {
        let hit = best_match(index, &leaf.text).map(|entry| entry.bounds);
        mapping.insert(leaf.path, hit);
    }
    Ok(mapping)
}

/// Row/group-level highlighting: every container path maps to the union of
/// its descendants' boxes. Containers with no matched descendant map to
/// `None`.
pub fn group_mapping(leaf_mapping: &PathMapping, policy: PagePolicy) -> PathMapping {
    let mut collected: BTreeMap<String, Vec<BoundingBox>> = BTreeMap::new();
    for (path, bounds) in leaf_mapping {
        for prefix in container_prefixes(path) {
            let slot = collected.entry(prefix).or_default();
            if let Some(b) = bounds {
                slot.push(*b);
            }
        }
    }
    collected
        .into_iter()
        .map(|(path, boxes)| {
            let union = union_boxes_with_policy(&boxes, policy);
            (path, union)
        })
        .collect()
}

fn container_prefixes(path: &str) -> Vec<String> {
    let segments: Vec<&str> = path.split('.').collect();
    (1..segments.len()).map(|end| segments[..end].join(".")).collect()
}

/// The full pipeline: extract the source tree, build the index, match the
/// payload, and stamp the result with the content identity of everything
/// that produced it so hosts can cache by hash. Index build and match stay
/// separately callable through `TextIndex::build` and `create_mapping`.
pub fn map_document(
    source_tree: &Value,
    payload_tree: &Value,
    cfg: &MatchConfigV1,
    include_groups: bool,
) -> AppResult<MappingArtifact> {
    validate_match_config(cfg)?;
    let source_hash = ContentHash(hash_canonical(source_tree)?);
    let payload_hash = ContentHash(hash_canonical(payload_tree)?);
    let config_hash = hash_match_config(cfg)?;

    let mapping = build_leaf_mapping(source_tree, payload_tree, cfg).unwrap_or_default();
    let groups = include_groups.then(|| group_mapping(&mapping, cfg.page_policy));

    let matched = mapping.values().filter(|b| b.is_some()).count() as i64;
    let leaves = mapping.len() as i64;
    Ok(MappingArtifact {
        mapping,
        groups,
        stats: MappingStats {
            leaves,
            matched,
            unmatched: leaves - matched,
        },
        source_hash,
        payload_hash,
        config_hash,
    })
}

fn build_leaf_mapping(
    source_tree: &Value,
    payload_tree: &Value,
    cfg: &MatchConfigV1,
) -> AppResult<PathMapping> {
    let extractor = DefaultExtractor::new(cfg.max_depth);
    let entries = extractor.extract_entries(source_tree)?;
    let index = TextIndex::build(entries);
    create_mapping_checked(payload_tree, &index, cfg)
}
