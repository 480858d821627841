use anyhow::Result;
use clap::Parser;
use fgt_conf_core::SplitMode;
use tracing_subscriber::EnvFilter;

mod cli;
mod convert_cmd;
mod path_guard;
mod sections_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Convert(args) => convert_cmd::run_convert(args),
        Command::Sections(args) => sections_cmd::run_sections(args),
    }
}

fn split_mode(nested_blocks: bool) -> SplitMode {
    if nested_blocks {
        SplitMode::Nested
    } else {
        SplitMode::Flat
    }
}
