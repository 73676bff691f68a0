//! End-to-end conversion over in-memory xlsx payloads.

use rust_xlsxwriter::Workbook;

use waybill_convert::{ENCRYPTED_EXPORT_PASSWORD, InputFile, convert_batch};
use waybill_ingest::{Decryptor, IngestError, PlainDecryptor};
use waybill_map::PlatformRegistry;
use waybill_model::{Platform, TargetSchema};

fn xlsx(rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, *value).unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

fn input(name: &str, bytes: Vec<u8>) -> InputFile {
    InputFile {
        name: name.to_string(),
        bytes,
    }
}

#[test]
fn coupang_file_is_classified_and_order_numbers_copy_verbatim() {
    let bytes = xlsx(&[
        &["주문번호", "수취인이름", "결제액", "구매수", "등록상품명", "등록옵션명"],
        &["C-1001", "김철수", "15000", "1", "무선 마우스", "블랙"],
        &["C-1002", "이영희", "8200", "2", "텀블러", "500ml"],
    ]);
    let out = convert_batch(
        &[input("coupang.xlsx", bytes)],
        &TargetSchema::builtin(),
        &PlatformRegistry::default(),
        &PlainDecryptor,
    )
    .unwrap();

    assert_eq!(out.summaries.len(), 1);
    assert_eq!(out.summaries[0].platform, Platform::Coupang);
    assert_eq!(out.summaries[0].row_count, 2);
    assert_eq!(
        out.merged.column("고객주문번호").unwrap(),
        vec!["C-1001", "C-1002"]
    );
    assert_eq!(
        out.merged.column("품목명").unwrap(),
        vec!["무선 마우스 블랙", "텀블러 500ml"]
    );
    // Carrier fields have no source and stay blank.
    assert_eq!(out.merged.column("운송장번호").unwrap(), vec!["", ""]);
}

#[test]
fn mixed_batch_merges_in_upload_order_with_item_names_filled() {
    let coupang = xlsx(&[
        &["주문번호", "수취인이름", "결제액", "구매수", "등록상품명", "등록옵션명"],
        &["C-1", "김철수", "1000", "1", "마우스", "블랙"],
        &["C-2", "박민수", "2000", "1", "키보드", ""],
    ]);
    let smartstore = xlsx(&[
        &["상품주문번호", "수취인명", "상품명", "옵션정보", "배송메시지"],
        &["S-1", "이영희", "면 티셔츠 화이트", "티셔츠 화이트 L", "문앞에 놓아주세요"],
    ]);

    let out = convert_batch(
        &[
            input("coupang.xlsx", coupang),
            input("smartstore.xlsx", smartstore),
        ],
        &TargetSchema::builtin(),
        &PlatformRegistry::default(),
        &PlainDecryptor,
    )
    .unwrap();

    assert_eq!(out.summaries[0].platform, Platform::Coupang);
    assert_eq!(out.summaries[1].platform, Platform::SmartStore);
    assert_eq!(out.merged.row_count(), 3);
    assert_eq!(
        out.merged.column("품목명").unwrap(),
        vec!["마우스 블랙", "키보드", "면 티셔츠 화이트 L"]
    );
    assert_eq!(
        out.merged.column("받는분성명").unwrap(),
        vec!["김철수", "박민수", "이영희"]
    );
}

#[test]
fn unrecognized_file_contributes_blank_rows_not_an_error() {
    let bytes = xlsx(&[&["foo", "bar"], &["1", "2"], &["3", "4"]]);
    let out = convert_batch(
        &[input("mystery.xlsx", bytes)],
        &TargetSchema::builtin(),
        &PlatformRegistry::default(),
        &PlainDecryptor,
    )
    .unwrap();

    assert_eq!(out.summaries[0].platform, Platform::Unknown);
    assert_eq!(out.summaries[0].mapped_fields, 0);
    assert_eq!(out.merged.row_count(), 2);
    assert!(out.merged.rows().iter().flatten().all(String::is_empty));
}

/// Stands in for a real password decryptor: hands back a pre-decrypted
/// payload when asked with the expected fixed password.
struct CannedDecryptor {
    plain: Vec<u8>,
}

impl Decryptor for CannedDecryptor {
    fn decrypt(&self, _name: &str, _bytes: &[u8], password: &str) -> waybill_ingest::Result<Vec<u8>> {
        assert_eq!(password, ENCRYPTED_EXPORT_PASSWORD);
        Ok(self.plain.clone())
    }
}

fn cfb_container() -> Vec<u8> {
    let mut bytes = vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];
    bytes.extend_from_slice(b"opaque-encrypted-body");
    bytes
}

#[test]
fn encrypted_export_decodes_on_retry_with_banner_row_skipped() {
    let plain = xlsx(&[
        &["주문 목록 다운로드", "", "", "", "", "", ""],
        &["주문번호", "상품명", "옵션", "수령인", "휴대폰번호", "우편번호", "판매채널"],
        &["A-1", "원피스", "프리", "최지우", "010-1234-5678", "04524", "에이블리"],
    ]);
    let decryptor = CannedDecryptor { plain };

    let out = convert_batch(
        &[input("ably.xlsx", cfb_container())],
        &TargetSchema::builtin(),
        &PlatformRegistry::default(),
        &decryptor,
    )
    .unwrap();

    assert_eq!(out.summaries[0].platform, Platform::Ably);
    assert_eq!(out.merged.column("고객주문번호").unwrap(), vec!["A-1"]);
    assert_eq!(
        out.merged.column("받는분전화번호").unwrap(),
        vec!["010-1234-5678"]
    );
}

#[test]
fn encrypted_export_without_a_real_decryptor_is_fatal() {
    let err = convert_batch(
        &[input("ably.xlsx", cfb_container())],
        &TargetSchema::builtin(),
        &PlatformRegistry::default(),
        &PlainDecryptor,
    )
    .unwrap_err();

    let waybill_convert::ConvertError::Ingest(err) = err else {
        panic!("expected an ingest error, got {err}");
    };
    assert!(matches!(err, IngestError::Encrypted { .. }));
}
