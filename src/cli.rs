//! CLI argument parsing for the curation workflow.
//!
//! The CLI is intentionally thin: it names files, a corpus range, and the
//! formatter configuration, and leaves all sequencing to the driver.

use crate::stage::FormatPlan;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint for the curation workflow.
#[derive(Parser, Debug)]
#[command(
    name = "genbench",
    version,
    about = "Curate C++ genericization benchmark records from a corpus snapshot",
    after_help = "Commands:\n  convert --corpus <jsonl> --output <jsonl> --start <n> --count <n>\n      Curate corpus entries [start, start+count) and append records\n  fix --store <jsonl> --task-id <id>\n      Rework one stored record and rewrite the store\n\nExamples:\n  genbench convert --corpus hep-cpp.jsonl --output records.jsonl --start 0 --count 20\n  genbench convert --corpus hep-cpp.jsonl --output records.jsonl --start 20 --count 5 --format-plan accept-only\n  genbench fix --store records.jsonl --task-id HEP/7",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level operating modes.
#[derive(Subcommand, Debug)]
pub enum Command {
    Convert(ConvertArgs),
    Fix(FixArgs),
}

/// Formatter configuration shared by both modes.
#[derive(Parser, Debug)]
pub struct FormatterArgs {
    /// Path to clang-format (default: resolved from PATH)
    #[arg(long, value_name = "PATH")]
    pub clang_format: Option<PathBuf>,

    /// Skip formatting entirely (dry runs and environments without clang-format)
    #[arg(long)]
    pub no_format: bool,

    /// When to format code artifacts relative to the edit window
    #[arg(long, value_enum, default_value = "seed-and-accept")]
    pub format_plan: FormatPlan,
}

/// Convert command inputs: curate a corpus range into new records.
#[derive(Parser, Debug)]
#[command(about = "Curate a corpus range and append records to the store")]
pub struct ConvertArgs {
    /// Corpus snapshot (JSONL, one entry per line)
    #[arg(long, value_name = "FILE")]
    pub corpus: PathBuf,

    /// Output record store (JSONL, appended to)
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// First corpus index to curate
    #[arg(long, value_name = "N")]
    pub start: usize,

    /// Number of corpus entries to curate
    #[arg(long, value_name = "N")]
    pub count: usize,

    #[command(flatten)]
    pub formatter: FormatterArgs,
}

/// Fix command inputs: rework exactly one existing record.
#[derive(Parser, Debug)]
#[command(about = "Rework one stored record and rewrite the whole store")]
pub struct FixArgs {
    /// Record store to load and rewrite (JSONL)
    #[arg(long, value_name = "FILE")]
    pub store: PathBuf,

    /// Task id of the record to rework (e.g. HEP/7)
    #[arg(long, value_name = "ID")]
    pub task_id: String,

    #[command(flatten)]
    pub formatter: FormatterArgs,
}
