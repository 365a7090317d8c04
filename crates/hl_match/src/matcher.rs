use crate::index::TextIndex;
use hl_core::keys::key_variants;
use hl_core::types::SourceEntry;

/// Probes the index with the leaf's key variants in priority order and picks
/// one source entry from the first key that has candidates. `None` when no
/// variant matches anything.
pub fn best_match<'a>(index: &'a TextIndex, value_text: &str) -> Option<&'a SourceEntry> {
    for variant in key_variants(value_text) {
        let candidates = index.candidates(&variant.key);
        if !candidates.is_empty() {
            return pick_candidate(index, candidates);
        }
    }
    None
}

// Longest raw source text wins; equal lengths keep the earliest-inserted
// entry. Candidate lists are in insertion order, so only a strictly longer
// text displaces the current pick.
fn pick_candidate<'a>(index: &'a TextIndex, candidates: &[usize]) -> Option<&'a SourceEntry> {
    let mut best: Option<&SourceEntry> = None;
    for &idx in candidates {
        let entry = index.entry(idx)?;
        let longer = best
            .map(|b| entry.text.chars().count() > b.text.chars().count())
            .unwrap_or(true);
        if longer {
            best = Some(entry);
        }
    }
    best
}
