//! Header and cell-value canonicalization for fuzzy comparison.

/// Punctuation stripped from headers before matching. Everything else,
/// including Hangul and other non-ASCII text, passes through unchanged.
const HEADER_PUNCT: [char; 8] = ['(', ')', '-', '_', '/', '.', ',', '·'];

/// Canonicalizes a header string: trim, lowercase, drop every internal
/// whitespace run entirely, strip the fixed punctuation set.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    strip(raw, &HEADER_PUNCT)
}

/// Like [`normalize`] but additionally strips `:`. Used where cell values or
/// composed item names are compared, since option text is commonly written
/// as `색상: 블랙`.
pub fn normalize_value(raw: &str) -> String {
    const VALUE_PUNCT: [char; 9] = ['(', ')', '-', '_', '/', '.', ',', '·', ':'];
    strip(raw, &VALUE_PUNCT)
}

fn strip(raw: &str, punct: &[char]) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace() && !punct.contains(ch))
        .collect()
}
