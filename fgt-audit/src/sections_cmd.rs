use anyhow::{Context, Result};
use fgt_audit::report::render_sections;
use fgt_conf_core::{read_lines, split_sections, SectionKind};
use serde_json::{json, Map, Value};

use crate::cli::{OutputFormat, SectionsArgs};
use crate::split_mode;

pub fn run_sections(args: SectionsArgs) -> Result<()> {
    let lines = read_lines(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let sections = split_sections(&lines, split_mode(args.nested_blocks));

    match args.format {
        OutputFormat::Text => println!("{}", render_sections(&sections)),
        OutputFormat::Json => {
            let counts: Map<String, Value> = SectionKind::ALL
                .into_iter()
                .map(|kind| (kind.marker().to_string(), json!(sections.get(kind).len())))
                .collect();
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
    }
    Ok(())
}
