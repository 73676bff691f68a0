//! Platform-specific field synthesizers.
//!
//! These run after the generic field mapper and replace whole output
//! columns for fields that cannot be a 1:1 column copy: composed item
//! names, and contact fields that the Ably export splits across several
//! source columns.

use waybill_map::find_column;
use waybill_model::{Platform, Table};

use crate::dedupe::merge_dedup;

/// Target field of the item-name synthesizers.
const ITEM_NAME_FIELD: &str = "품목명";

/// Coupang export columns used to compose the item name, and the fixed
/// positions they occupy in the stock export layout. The positional lookup
/// is a documented last resort behind alias resolution: it assumes the
/// column order of an untouched export.
const COUPANG_PRODUCT_ALIASES: [&str; 2] = ["등록상품명", "상품명"];
const COUPANG_OPTION_ALIASES: [&str; 3] = ["등록옵션명", "옵션명", "옵션정보"];
const COUPANG_PRODUCT_INDEX: usize = 10;
const COUPANG_OPTION_INDEX: usize = 11;

const SMARTSTORE_PRODUCT_ALIASES: [&str; 2] = ["상품명", "주문상품명"];
const SMARTSTORE_OPTION_ALIASES: [&str; 2] = ["옵션정보", "옵션"];

/// One replaced output column: the target field and its per-row values.
#[derive(Debug, Clone)]
pub struct SynthesizedField {
    pub field: String,
    pub values: Vec<String>,
}

/// Runs every synthesizer registered for `platform` over one source table.
/// Returned columns supersede whatever the generic mapper copied.
pub fn synthesize(table: &Table, platform: Platform) -> Vec<SynthesizedField> {
    match platform {
        Platform::Coupang => coupang_overrides(table),
        Platform::SmartStore => smartstore_overrides(table),
        Platform::Ably => ably_overrides(table),
        Platform::Unknown => Vec::new(),
    }
}

/// Item name = product + option, space-joined per row.
fn coupang_overrides(table: &Table) -> Vec<SynthesizedField> {
    let product = column_values(table, &COUPANG_PRODUCT_ALIASES)
        .or_else(|| positional_values(table, COUPANG_PRODUCT_INDEX));
    let option = column_values(table, &COUPANG_OPTION_ALIASES)
        .or_else(|| positional_values(table, COUPANG_OPTION_INDEX));

    let Some(product) = product else {
        return Vec::new();
    };
    let values = match option {
        Some(option) => product
            .iter()
            .zip(option.iter())
            .map(|(p, o)| join_clean(p, o))
            .collect(),
        None => product.iter().map(|p| p.trim().to_string()).collect(),
    };
    vec![SynthesizedField {
        field: ITEM_NAME_FIELD.to_string(),
        values,
    }]
}

/// Item name = dedup merge of the product and option columns, which repeat
/// each other in most SmartStore exports.
fn smartstore_overrides(table: &Table) -> Vec<SynthesizedField> {
    let product = column_values(table, &SMARTSTORE_PRODUCT_ALIASES);
    let option = column_values(table, &SMARTSTORE_OPTION_ALIASES);

    let values = match (product, option) {
        (Some(product), Some(option)) => product
            .iter()
            .zip(option.iter())
            .map(|(p, o)| merge_dedup(p, o))
            .collect(),
        (Some(one), None) | (None, Some(one)) => {
            one.iter().map(|v| v.trim().to_string()).collect()
        }
        (None, None) => return Vec::new(),
    };
    vec![SynthesizedField {
        field: ITEM_NAME_FIELD.to_string(),
        values,
    }]
}

/// Ably splits contact data across several columns that vary by seller
/// tool; each field tries its choice lists in order and blanks out when
/// nothing resolves.
fn ably_overrides(table: &Table) -> Vec<SynthesizedField> {
    let rows = table.row_count();
    vec![
        SynthesizedField {
            field: "받는분전화번호".to_string(),
            values: multi_source(
                table,
                &[
                    &["휴대폰번호", "수령인 휴대폰"],
                    &["전화번호", "수령인 연락처"],
                    &["연락처"],
                ],
                rows,
            ),
        },
        SynthesizedField {
            field: "받는분우편번호".to_string(),
            values: multi_source(
                table,
                &[
                    &["수령인 우편번호", "수령인우편번호"],
                    &["배송지 우편번호", "배송지우편번호"],
                    &["우편번호", "zipcode"],
                ],
                rows,
            ),
        },
        SynthesizedField {
            field: "받는분주소".to_string(),
            values: ably_address(table, rows),
        },
    ]
}

/// First-choice, second-choice, then generic alias lists; first column that
/// resolves wins, otherwise every cell is empty.
fn multi_source(table: &Table, choices: &[&[&str]], rows: usize) -> Vec<String> {
    for aliases in choices {
        if let Some(values) = column_values(table, aliases) {
            return values;
        }
    }
    vec![String::new(); rows]
}

/// Base + detail address when both resolve, base alone otherwise, then the
/// generic full-address aliases as a last resort.
fn ably_address(table: &Table, rows: usize) -> Vec<String> {
    const BASE_ALIASES: [&str; 2] = ["기본주소", "기본 주소"];
    const DETAIL_ALIASES: [&str; 2] = ["상세주소", "상세 주소"];
    const FULL_ALIASES: [&str; 3] = ["주소", "배송지주소", "수령인 주소"];

    if let Some(base) = column_values(table, &BASE_ALIASES) {
        return match column_values(table, &DETAIL_ALIASES) {
            Some(detail) => base
                .iter()
                .zip(detail.iter())
                .map(|(b, d)| join_clean(b, d))
                .collect(),
            None => base.iter().map(|b| b.trim().to_string()).collect(),
        };
    }
    multi_source(table, &[&FULL_ALIASES], rows)
}

/// Resolves an alias list and returns the matched column's values.
fn column_values(table: &Table, aliases: &[&str]) -> Option<Vec<String>> {
    let aliases: Vec<String> = aliases.iter().map(|a| (*a).to_string()).collect();
    let column = find_column(table, &aliases)?;
    Some(
        table
            .column(&column)?
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

fn positional_values(table: &Table, idx: usize) -> Option<Vec<String>> {
    Some(
        table
            .column_at(idx)?
            .into_iter()
            .map(str::to_string)
            .collect(),
    )
}

/// Space-joins two fragments, trimming each and collapsing any internal
/// multi-space runs to one space.
fn join_clean(a: &str, b: &str) -> String {
    let joined = format!("{} {}", a.trim(), b.trim());
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}
