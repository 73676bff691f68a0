//! CLI argument definitions for the invoice converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "waybill",
    version,
    about = "Merge marketplace order exports into one carrier invoice workbook",
    long_about = "Convert marketplace order exports (xlsx) into a single carrier\n\
                  invoice workbook.\n\n\
                  Each input file is classified by its headers, its columns are\n\
                  mapped onto the invoice template, and all rows are merged in\n\
                  upload order."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow recipient data (names, phones, addresses) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert order export files and write the merged invoice workbook.
    Convert(ConvertArgs),

    /// Print the platform signature and alias tables as JSON.
    Registry(RegistryArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Order export files to convert, in merge order.
    #[arg(value_name = "FILE", num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Invoice template workbook; its header row becomes the output schema.
    #[arg(long = "template", value_name = "XLSX")]
    pub template: Option<PathBuf>,

    /// JSON file overriding the built-in signature and alias tables.
    #[arg(long = "registry", value_name = "JSON")]
    pub registry: Option<PathBuf>,

    /// Directory the merged invoice workbook is written to.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Also write the per-file summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Classify and map without writing any output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RegistryArgs {
    /// Print this JSON registry instead of the built-in tables.
    #[arg(long = "registry", value_name = "JSON")]
    pub registry: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
