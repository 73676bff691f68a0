//! Platform classification from header signatures and value hints.

use tracing::debug;

use waybill_model::{Platform, Table};

use crate::normalize::{normalize, normalize_value};
use crate::registry::{PlatformRegistry, SignatureSet};
use crate::resolver::find_column;

/// Score for a keyword matching a header's normalized form exactly.
const EXACT_KEYWORD_SCORE: u32 = 2;
/// Score for a keyword matching by substring containment (either direction).
const PARTIAL_KEYWORD_SCORE: u32 = 1;
/// Bonus when the designated value-hint column corroborates the platform.
const VALUE_HINT_BONUS: u32 = 3;

/// Detects the platform of one input table.
///
/// Pure in the table's headers and designated value-hint column: the same
/// input always yields the same platform. All-zero scores classify as
/// [`Platform::Unknown`]; ties go to the first-declared signature set.
pub fn detect(table: &Table, registry: &PlatformRegistry) -> Platform {
    let header_norms: Vec<String> = table.headers().iter().map(|h| normalize(h)).collect();

    let mut best: Option<(Platform, u32)> = None;
    for signature in &registry.signatures {
        let score = score_signature(table, signature, &header_norms);
        debug!(platform = %signature.platform, score, "signature scored");
        // Strictly-greater comparison keeps the first-declared platform on ties.
        if score > 0 && best.map_or(true, |(_, s)| score > s) {
            best = Some((signature.platform, score));
        }
    }

    best.map_or(Platform::Unknown, |(platform, _)| platform)
}

fn score_signature(table: &Table, signature: &SignatureSet, header_norms: &[String]) -> u32 {
    let mut score = 0;
    for keyword in &signature.keywords {
        let normalized = normalize(keyword);
        if header_norms.iter().any(|h| *h == normalized) {
            score += EXACT_KEYWORD_SCORE;
        } else if !normalized.is_empty()
            && header_norms
                .iter()
                .any(|h| h.contains(&normalized) || normalized.contains(h.as_str()))
        {
            score += PARTIAL_KEYWORD_SCORE;
        }
    }

    if let Some(hint) = &signature.value_hint
        && value_hint_corroborates(table, &hint.column_aliases, &hint.token)
    {
        score += VALUE_HINT_BONUS;
    }

    score
}

/// True when the hint column resolves and at least one of its cell values
/// contains the platform token after normalization.
fn value_hint_corroborates(table: &Table, column_aliases: &[String], token: &str) -> bool {
    let Some(column) = find_column(table, column_aliases) else {
        return false;
    };
    let Some(values) = table.column(&column) else {
        return false;
    };
    let token = normalize_value(token);
    if token.is_empty() {
        return false;
    }
    values
        .iter()
        .any(|value| normalize_value(value).contains(&token))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: Vec<Vec<&str>>) -> Table {
        Table::new(
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn coupang_headers_classify_coupang() {
        let registry = PlatformRegistry::default();
        let table = table(
            &["주문번호", "수취인이름", "결제액", "구매수", "등록상품명"],
            vec![],
        );
        assert_eq!(detect(&table, &registry), Platform::Coupang);
    }

    #[test]
    fn smartstore_headers_classify_smartstore() {
        let registry = PlatformRegistry::default();
        let table = table(
            &["상품주문번호", "수취인명", "옵션정보", "우편번호", "배송메시지"],
            vec![],
        );
        assert_eq!(detect(&table, &registry), Platform::SmartStore);
    }

    #[test]
    fn unrelated_headers_classify_unknown() {
        let registry = PlatformRegistry::default();
        let table = table(&["alpha", "beta", "gamma"], vec![]);
        assert_eq!(detect(&table, &registry), Platform::Unknown);
    }

    #[test]
    fn detection_is_deterministic() {
        let registry = PlatformRegistry::default();
        let table = table(&["주문번호", "상품명", "우편번호"], vec![]);
        let first = detect(&table, &registry);
        for _ in 0..3 {
            assert_eq!(detect(&table, &registry), first);
        }
    }

    #[test]
    fn tie_goes_to_first_declared_platform() {
        let registry = PlatformRegistry::default();
        // 배송메시지 is an exact keyword of both the Coupang and SmartStore
        // signatures; with only that header the scores tie at 2 and the
        // first-declared platform (Coupang) must win, reproducibly.
        let table = table(&["배송메시지"], vec![]);
        assert_eq!(detect(&table, &registry), Platform::Coupang);
    }

    #[test]
    fn value_hint_breaks_ambiguity_toward_ably() {
        let registry = PlatformRegistry::default();
        // Headers alone score Ably 4 (주문번호 + 우편번호) vs SmartStore 5;
        // the sales-channel column naming the platform flips the result.
        let table = table(
            &["주문번호", "우편번호", "판매채널"],
            vec![
                vec!["A-1", "04524", "에이블리"],
                vec!["A-2", "04524", "에이블리"],
            ],
        );
        assert_eq!(detect(&table, &registry), Platform::Ably);
    }

    #[test]
    fn value_hint_without_token_does_not_fire() {
        let registry = PlatformRegistry::default();
        let with_hint = table(&["주문번호", "판매채널"], vec![vec!["A-1", "자사몰"]]);
        // Hint column resolves but no cell carries the token: no bonus for
        // Ably, and SmartStore's extra partial match (상품주문번호) wins.
        assert_eq!(detect(&with_hint, &registry), Platform::SmartStore);
    }
}
