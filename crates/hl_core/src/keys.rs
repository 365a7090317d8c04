use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Normalized,
    Alnum,
    Upper,
    UpperAlnum,
    DatePrefix,
    DatePrefixAlnum,
    DatePrefixUpper,
    DatePrefixUpperAlnum,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyVariant {
    pub kind: KeyKind,
    pub key: String,
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Collapses whitespace runs to a single space and trims both ends.
pub fn normalize_text(text: &str) -> String {
    whitespace_runs().replace_all(text.trim(), " ").into_owned()
}

/// Strips every character outside `[0-9A-Za-z]`. Tolerates punctuation and
/// formatting differences in phone numbers, reference numbers and the like.
pub fn strip_non_alnum(text: &str) -> String {
    text.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// The ordered key-variant table for one raw text. Both the index build and
/// the probe side derive their keys from this single function, in this
/// priority order: normalized, alphanumeric-stripped, uppercase forms, then
/// date-truncated forms (so a date-only value matches a full timestamp).
/// Duplicates and empty keys are dropped, first occurrence winning.
pub fn key_variants(text: &str) -> Vec<KeyVariant> {
    let normalized = normalize_text(text);
    let alnum = strip_non_alnum(&normalized);

    let mut variants = Vec::new();
    push_variant(&mut variants, KeyKind::Normalized, normalized.clone());
    push_variant(&mut variants, KeyKind::Alnum, alnum.clone());
    push_variant(&mut variants, KeyKind::Upper, normalized.to_uppercase());
    push_variant(&mut variants, KeyKind::UpperAlnum, alnum.to_uppercase());

    if let Some(idx) = normalized.find('T') {
        let prefix = normalized[..idx].trim_end().to_string();
        let prefix_alnum = strip_non_alnum(&prefix);
        push_variant(&mut variants, KeyKind::DatePrefix, prefix.clone());
        push_variant(&mut variants, KeyKind::DatePrefixAlnum, prefix_alnum.clone());
        push_variant(&mut variants, KeyKind::DatePrefixUpper, prefix.to_uppercase());
        push_variant(&mut variants, KeyKind::DatePrefixUpperAlnum, prefix_alnum.to_uppercase());
    }

    variants
}

fn push_variant(variants: &mut Vec<KeyVariant>, kind: KeyKind, key: String) {
    if key.is_empty() || variants.iter().any(|v| v.key == key) {
        return;
    }
    variants.push(KeyVariant { kind, key });
}
