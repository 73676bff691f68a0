//! Deduplicating merge of overlapping free-text columns.

/// Merges two item-name fragments that often repeat each other.
///
/// Empty sides collapse to the other; a substring collapses to the longer
/// string; otherwise both are tokenized on whitespace and the token streams
/// are concatenated in first-seen order with repeats dropped.
pub fn merge_dedup(x: &str, y: &str) -> String {
    let x = x.trim();
    let y = y.trim();
    if x.is_empty() {
        return y.to_string();
    }
    if y.is_empty() {
        return x.to_string();
    }
    if x == y {
        return x.to_string();
    }
    if y.contains(x) {
        return y.to_string();
    }
    if x.contains(y) {
        return x.to_string();
    }

    let mut seen: Vec<&str> = Vec::new();
    for token in x.split_whitespace().chain(y.split_whitespace()) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_and_empty_collapse() {
        assert_eq!(merge_dedup("a b", "a b"), "a b");
        assert_eq!(merge_dedup("a b", ""), "a b");
        assert_eq!(merge_dedup("", "a b"), "a b");
        assert_eq!(merge_dedup("", ""), "");
    }

    #[test]
    fn substring_collapses_to_longer() {
        assert_eq!(merge_dedup("무선 마우스", "무선 마우스 블랙"), "무선 마우스 블랙");
        assert_eq!(merge_dedup("무선 마우스 블랙", "마우스 블랙"), "무선 마우스 블랙");
    }

    #[test]
    fn token_union_keeps_first_seen_order() {
        assert_eq!(merge_dedup("a b", "b c"), "a b c");
        assert_eq!(merge_dedup("면 티셔츠 화이트", "티셔츠 화이트 L"), "면 티셔츠 화이트 L");
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(merge_dedup("  a b ", " b  c "), "a b c");
    }
}
