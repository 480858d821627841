use std::path::Path;

use anyhow::{bail, Context, Result};
use fgt_audit::address::Precedence;
use fgt_audit::export::{render_json, write_csv_dir, write_text};
use fgt_audit::extract::{extract, ExtractOptions};
use fgt_audit::labels::Labels;
use fgt_audit::report::{render_summary, render_tables};
use fgt_audit::table::{ReportTables, TABLE_NAMES};
use fgt_conf_core::read_lines;
use tracing::{info, warn};

use crate::cli::{ConvertArgs, ReportFormat};
use crate::path_guard;
use crate::split_mode;

pub fn run_convert(args: ConvertArgs) -> Result<()> {
    if let Some(output) = &args.output {
        let targets = match args.format {
            ReportFormat::Csv => TABLE_NAMES
                .iter()
                .map(|name| output.join(format!("{name}.csv")))
                .collect(),
            ReportFormat::Text | ReportFormat::Json => vec![output.clone()],
        };
        path_guard::ensure_targets_spare_input(&args.input, &targets)?;
    }

    let lines = read_lines(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let options = ExtractOptions {
        split_mode: split_mode(args.nested_blocks),
        precedence: if args.first_match {
            Precedence::FirstDeclared
        } else {
            Precedence::LastDeclared
        },
    };
    let extraction = extract(&lines, &options);

    if args.summary {
        println!("{}", render_summary(&extraction.summary()));
        return Ok(());
    }

    let labels = resolve_labels(args.labels.as_deref());
    let tables = ReportTables::build(&extraction, &labels);

    match (args.format, args.output.as_deref()) {
        (ReportFormat::Text, None) => println!("{}", render_tables(&tables)),
        (ReportFormat::Json, None) => println!("{}", render_json(&tables)?),
        (ReportFormat::Text, Some(path)) => {
            colored::control::set_override(false);
            write_text(path, &format!("{}\n", render_tables(&tables)))
                .context("failed to write text report")?;
            info!(path = %path.display(), "wrote text report");
        }
        (ReportFormat::Json, Some(path)) => {
            write_text(path, &format!("{}\n", render_json(&tables)?))
                .context("failed to write JSON report")?;
            info!(path = %path.display(), "wrote JSON report");
        }
        (ReportFormat::Csv, Some(dir)) => {
            let written = write_csv_dir(&tables, dir).context("failed to write CSV report")?;
            info!(dir = %dir.display(), files = written.len(), "wrote CSV report");
        }
        (ReportFormat::Csv, None) => bail!("--format csv requires --output <DIR>"),
    }

    Ok(())
}

fn resolve_labels(path: Option<&Path>) -> Labels {
    let Some(path) = path else {
        return Labels::default();
    };
    match Labels::load(path) {
        Ok(labels) => labels,
        Err(err) => {
            warn!("{err}; using embedded labels");
            Labels::default()
        }
    }
}
