//! Immutable platform signature and candidate-alias configuration.
//!
//! The registry is built once at startup (built-in tables or a JSON file)
//! and passed explicitly into the classifier and field mapper. Field order
//! in `candidates` is the declaration order the mapper iterates in.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use waybill_model::Platform;

/// Value-based corroboration for one platform: if the designated column
/// resolves and any of its cell values contains `token` (normalized), the
/// platform's score gets a fixed bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueHint {
    /// Alias list used to resolve the designated column.
    pub column_aliases: Vec<String>,
    /// Platform-identifying literal searched for inside cell values.
    pub token: String,
}

/// Keyword signature for one platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureSet {
    pub platform: Platform,
    /// Keywords expected among the table's headers, exactly or approximately.
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_hint: Option<ValueHint>,
}

/// Per-platform source-header aliases for one target invoice field,
/// most-preferred first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldCandidates {
    pub field: String,
    pub aliases: BTreeMap<Platform, Vec<String>>,
}

impl FieldCandidates {
    pub fn aliases_for(&self, platform: Platform) -> Option<&[String]> {
        self.aliases.get(&platform).map(Vec::as_slice)
    }
}

/// Read-only registry: platform signatures plus the candidate map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformRegistry {
    /// Signature sets in classifier priority order (first declared wins ties).
    pub signatures: Vec<SignatureSet>,
    /// Candidate map in mapper iteration order.
    pub candidates: Vec<FieldCandidates>,
}

impl PlatformRegistry {
    /// Loads a registry from a JSON file, for overriding the built-in tables.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("read registry: {}", path.display()))?;
        let registry: Self = serde_json::from_str(&contents)
            .with_context(|| format!("parse registry: {}", path.display()))?;
        Ok(registry)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serialize registry")
    }

    pub fn signature(&self, platform: Platform) -> Option<&SignatureSet> {
        self.signatures.iter().find(|s| s.platform == platform)
    }
}

fn aliases(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn field(
    name: &str,
    coupang: &[&str],
    smartstore: &[&str],
    ably: &[&str],
) -> FieldCandidates {
    let mut map = BTreeMap::new();
    map.insert(Platform::Coupang, aliases(coupang));
    map.insert(Platform::SmartStore, aliases(smartstore));
    map.insert(Platform::Ably, aliases(ably));
    FieldCandidates {
        field: name.to_string(),
        aliases: map,
    }
}

impl Default for PlatformRegistry {
    /// Built-in tables for the stock Coupang, SmartStore, and Ably exports.
    fn default() -> Self {
        let signatures = vec![
            SignatureSet {
                platform: Platform::Coupang,
                keywords: aliases(&[
                    "등록상품명",
                    "수취인이름",
                    "주문번호",
                    "결제액",
                    "구매수",
                    "배송메시지",
                ]),
                value_hint: None,
            },
            SignatureSet {
                platform: Platform::SmartStore,
                keywords: aliases(&[
                    "상품주문번호",
                    "수취인명",
                    "배송메시지",
                    "옵션정보",
                    "주문번호",
                    "우편번호",
                ]),
                value_hint: None,
            },
            SignatureSet {
                platform: Platform::Ably,
                keywords: aliases(&[
                    "주문번호",
                    "상품명",
                    "옵션",
                    "수령인",
                    "휴대폰번호",
                    "우편번호",
                ]),
                value_hint: Some(ValueHint {
                    column_aliases: aliases(&["판매채널", "채널", "셀러툴"]),
                    token: "에이블리".to_string(),
                }),
            },
        ];

        let candidates = vec![
            field(
                "고객주문번호",
                &["주문번호", "고객주문번호", "order number", "orderno"],
                &["주문번호", "상품주문번호", "상품 주문번호", "주문관리번호", "order no"],
                &["주문번호", "주문 번호", "order no"],
            ),
            field(
                "품목명",
                &["등록상품명", "상품명", "옵션정보", "product name"],
                &["상품명", "옵션정보", "상품명(옵션포함)", "상품명/옵션", "주문상품명"],
                &["상품명", "주문상품명", "상품명(옵션)"],
            ),
            field(
                "기타1",
                &["결제액", "결제금액", "상품결제금액", "payment", "결제금"],
                &["결제금액", "상품주문금액", "총결제금액", "판매금액", "결제 금액"],
                &["결제금액", "총 결제금액", "상품금액"],
            ),
            field(
                "내품수량",
                &["구매수", "수량", "구매수량", "qty", "수량(개)"],
                &["수량", "구매수량", "주문수량", "상품수량", "qty"],
                &["수량", "주문수량", "qty"],
            ),
            field(
                "받는분성명",
                &["수취인이름", "수취인", "받는분", "수령인", "recipient"],
                &["수취인명", "수취인", "수령인", "받는사람", "받는분", "수취인 이름"],
                &["수령인", "수령인명", "받는분", "수취인"],
            ),
            field(
                "받는분전화번호",
                &["수취인연락처", "전화번호", "수취인전화번호", "휴대폰", "연락처"],
                &[
                    "수취인연락처1",
                    "수취인연락처",
                    "수취인연락처(1)",
                    "수취인 휴대전화",
                    "수취인전화번호",
                    "연락처",
                ],
                &["휴대폰번호", "수령인 휴대폰", "전화번호", "연락처"],
            ),
            field(
                "받는분우편번호",
                &["우편번호", "수취인우편번호", "배송지우편번호", "zip", "postcode"],
                &["우편번호", "수취인우편번호", "배송지우편번호", "수취인 우편번호"],
                &["우편번호", "수령인 우편번호", "zipcode"],
            ),
            field(
                "받는분주소",
                &["주소", "수취인주소", "배송지주소", "도로명주소", "받는분주소"],
                &["배송지", "배송지주소", "수취인주소", "기본주소", "도로명주소", "주소"],
                &["주소", "기본주소", "배송지주소", "수령인 주소"],
            ),
            field(
                "배송메시지",
                &["배송메시지", "요청사항", "배송요청사항", "message"],
                &["배송메시지", "배송 요청사항", "배송요청사항", "배송메모", "요청사항"],
                &["배송메시지", "배송요청사항", "배송메모", "요청사항"],
            ),
        ];

        Self {
            signatures,
            candidates,
        }
    }
}
