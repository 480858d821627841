use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fgt-audit")]
#[command(about = "Export FortiGate addresses, groups and policies as audit tables")]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert one configuration export into address, group and policy tables.
    Convert(ConvertArgs),
    /// Show how many lines each tracked section contains.
    Sections(SectionsArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// FortiGate configuration export.
    pub input: PathBuf,
    /// Output file (text/json) or directory (csv). Text and JSON print to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
    /// Optional labels TOML file for headers and the Internet Service label.
    #[arg(long)]
    pub labels: Option<PathBuf>,
    /// Skip nested `config ... end` sub-blocks so only the top-level `end` closes a section.
    #[arg(long)]
    pub nested_blocks: bool,
    /// Resolve duplicate address names to their first declaration.
    #[arg(long)]
    pub first_match: bool,
    /// Print only record counts.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Parser, Debug)]
pub struct SectionsArgs {
    /// FortiGate configuration export.
    pub input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Skip nested `config ... end` sub-blocks so only the top-level `end` closes a section.
    #[arg(long)]
    pub nested_blocks: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
