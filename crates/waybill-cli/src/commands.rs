//! Subcommand implementations.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, trace, warn};

use waybill_convert::{InputFile, convert_batch};
use waybill_ingest::{PlainDecryptor, read_workbook};
use waybill_map::PlatformRegistry;
use waybill_model::{FileSummary, Platform, TargetSchema};
use waybill_output::{merged_filename, write_workbook};

use waybill_cli::logging::redact_value;

use crate::cli::{ConvertArgs, RegistryArgs};

/// Outcome of a `convert` run, consumed by the summary printer.
pub struct ConvertResult {
    /// Path the merged workbook was written to; `None` on a dry run.
    pub output_path: Option<PathBuf>,
    pub summaries: Vec<FileSummary>,
    pub total_rows: usize,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let registry = load_registry(args.registry.as_deref())?;
    let schema = load_schema(args.template.as_deref())?;

    let mut inputs = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes = fs::read(path)
            .with_context(|| format!("read order file: {}", path.display()))?;
        inputs.push(InputFile {
            name: display_name(path),
            bytes,
        });
    }

    let batch = convert_batch(&inputs, &schema, &registry, &PlainDecryptor)?;
    for summary in &batch.summaries {
        if summary.platform == Platform::Unknown {
            warn!(
                file = %summary.file_name,
                rows = summary.row_count,
                "platform not recognized, rows left blank"
            );
        }
    }
    if let Some(first) = batch.merged.rows().first() {
        let cells: Vec<&str> = first.iter().map(|v| redact_value(v)).collect();
        trace!(row = ?cells, "first merged row");
    }

    let total_rows = batch.merged.row_count();
    let output_path = if args.dry_run {
        None
    } else {
        fs::create_dir_all(&args.output_dir)
            .with_context(|| format!("create output dir: {}", args.output_dir.display()))?;
        let path = args.output_dir.join(merged_filename(Local::now()));
        let bytes = write_workbook(&batch.merged)?;
        fs::write(&path, bytes)
            .with_context(|| format!("write invoice: {}", path.display()))?;
        info!(path = %path.display(), rows = total_rows, "invoice written");
        Some(path)
    };

    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&batch.summaries)
            .context("serialize summary")?;
        fs::write(path, json)
            .with_context(|| format!("write summary: {}", path.display()))?;
    }

    Ok(ConvertResult {
        output_path,
        summaries: batch.summaries,
        total_rows,
    })
}

pub fn run_registry(args: &RegistryArgs) -> Result<()> {
    let registry = load_registry(args.registry.as_deref())?;
    println!("{}", registry.to_json()?);
    Ok(())
}

fn load_registry(path: Option<&Path>) -> Result<PlatformRegistry> {
    match path {
        Some(path) => PlatformRegistry::from_json_file(path),
        None => Ok(PlatformRegistry::default()),
    }
}

/// Template header row becomes the output schema; a missing or unreadable
/// template file is fatal, not a silent fallback to the built-in schema.
fn load_schema(template: Option<&Path>) -> Result<TargetSchema> {
    match template {
        Some(path) => {
            let bytes = fs::read(path)
                .with_context(|| format!("read template: {}", path.display()))?;
            let table = read_workbook(&display_name(path), &bytes, 0)?;
            let schema = TargetSchema::new(table.headers().to_vec())?;
            info!(template = %path.display(), fields = schema.len(), "template schema loaded");
            Ok(schema)
        }
        None => Ok(TargetSchema::builtin()),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload.xlsx")
        .to_string()
}

#[cfg(test)]
mod tests {
    use rust_xlsxwriter::Workbook;

    use super::*;

    fn write_xlsx(path: &Path, rows: &[&[&str]]) {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (r, row) in rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                worksheet.write_string(r as u32, c as u16, *value).unwrap();
            }
        }
        workbook.save(path).unwrap();
    }

    #[test]
    fn convert_writes_invoice_and_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let order = dir.path().join("coupang.xlsx");
        write_xlsx(
            &order,
            &[
                &["주문번호", "수취인이름", "결제액", "구매수", "등록상품명"],
                &["C-1", "김철수", "1000", "1", "마우스"],
            ],
        );
        let summary_path = dir.path().join("summary.json");

        let args = ConvertArgs {
            files: vec![order],
            template: None,
            registry: None,
            output_dir: dir.path().to_path_buf(),
            summary_json: Some(summary_path.clone()),
            dry_run: false,
        };
        let result = run_convert(&args).unwrap();

        let output = result.output_path.unwrap();
        assert!(output.exists());
        assert_eq!(result.total_rows, 1);
        assert_eq!(result.summaries[0].platform, Platform::Coupang);

        let json = fs::read_to_string(summary_path).unwrap();
        let round: Vec<FileSummary> = serde_json::from_str(&json).unwrap();
        assert_eq!(round.len(), 1);
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let order = dir.path().join("orders.xlsx");
        write_xlsx(&order, &[&["foo"], &["1"]]);

        let args = ConvertArgs {
            files: vec![order],
            template: None,
            registry: None,
            output_dir: dir.path().to_path_buf(),
            summary_json: None,
            dry_run: true,
        };
        let result = run_convert(&args).unwrap();
        assert!(result.output_path.is_none());
        assert_eq!(result.summaries[0].platform, Platform::Unknown);
    }

    #[test]
    fn template_header_row_becomes_schema() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("template.xlsx");
        write_xlsx(&template, &[&["주문번호", "받는분", "메모"]]);

        let schema = load_schema(Some(&template)).unwrap();
        assert_eq!(schema.fields(), ["주문번호", "받는분", "메모"]);
    }

    #[test]
    fn missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-template.xlsx");
        let err = load_schema(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("read template"));
    }
}
