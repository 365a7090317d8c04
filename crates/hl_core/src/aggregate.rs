use crate::types::BoundingBox;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePolicy {
    #[default]
    Majority,
    FirstBox,
}

/// Smallest axis-aligned rectangle containing all inputs, with the default
/// page policy. `None` when no input box is usable.
pub fn union_boxes(boxes: &[BoundingBox]) -> Option<BoundingBox> {
    union_boxes_with_policy(boxes, PagePolicy::Majority)
}

pub fn union_boxes_with_policy(boxes: &[BoundingBox], policy: PagePolicy) -> Option<BoundingBox> {
    let finite: Vec<&BoundingBox> = boxes.iter().filter(|b| b.is_finite()).collect();
    match finite.as_slice() {
        [] => None,
        [only] => Some(**only),
        many => {
            let x = fold_min(many.iter().map(|b| b.x));
            let y = fold_min(many.iter().map(|b| b.y));
            let right = fold_max(many.iter().map(|b| b.right()));
            let bottom = fold_max(many.iter().map(|b| b.bottom()));
            Some(BoundingBox {
                x,
                y,
                width: right - x,
                height: bottom - y,
                page: resolve_page(many, policy),
            })
        }
    }
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}

fn resolve_page(boxes: &[&BoundingBox], policy: PagePolicy) -> Option<i64> {
    match policy {
        PagePolicy::FirstBox => boxes.iter().find_map(|b| b.page),
        PagePolicy::Majority => {
            // BTreeMap iteration is page-ascending, so the strictly-greater
            // comparison resolves count ties to the smallest page
            let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
            for page in boxes.iter().filter_map(|b| b.page) {
                *counts.entry(page).or_insert(0) += 1;
            }
            let mut winner: Option<(i64, usize)> = None;
            for (page, count) in counts {
                match winner {
                    Some((_, best)) if count <= best => {}
                    _ => winner = Some((page, count)),
                }
            }
            winner.map(|(page, _)| page)
        }
    }
}
