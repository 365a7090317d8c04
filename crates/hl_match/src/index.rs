use hl_core::keys::key_variants;
use hl_core::types::SourceEntry;
use std::collections::HashMap;

/// Multi-valued lookup from normalized key to source entries. Entries are
/// held in extraction order and each key's candidate list preserves that
/// order, which the matcher's tie-break depends on.
#[derive(Debug, Clone, Default)]
pub struct TextIndex {
    entries: Vec<SourceEntry>,
    by_key: HashMap<String, Vec<usize>>,
}

impl TextIndex {
    pub fn build(entries: Vec<SourceEntry>) -> Self {
        let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, entry) in entries.iter().enumerate() {
            for variant in key_variants(&entry.text) {
                by_key.entry(variant.key).or_default().push(idx);
            }
        }
        Self { entries, by_key }
    }

    pub fn candidates(&self, key: &str) -> &[usize] {
        self.by_key.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entry(&self, idx: usize) -> Option<&SourceEntry> {
        self.entries.get(idx)
    }

    pub fn entries(&self) -> &[SourceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
