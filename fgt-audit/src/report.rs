use colored::Colorize;
use fgt_conf_core::{SectionKind, SectionLines};

use crate::extract::ExtractionSummary;
use crate::table::{ReportTables, Table};

/// Render every report table for terminal output.
pub fn render_tables(tables: &ReportTables) -> String {
    let mut out = Vec::new();
    for (idx, table) in tables.iter().enumerate() {
        if idx > 0 {
            out.push(String::new());
        }
        append_table(&mut out, table);
    }
    out.join("\n")
}

fn append_table(out: &mut Vec<String>, table: &Table) {
    out.push(format!("[{}]", table.name).bold().cyan().to_string());
    out.push(table.header.join(" | ").bold().to_string());
    if table.rows.is_empty() {
        out.push("- none".to_string());
        return;
    }
    for row in &table.rows {
        out.push(row.join(" | "));
    }
}

/// Render extraction counts as a single line.
pub fn render_summary(summary: &ExtractionSummary) -> String {
    let line = format!(
        "addresses={} groups={} memberships={} unresolved_members={} policies={} internet_service_policies={}",
        summary.addresses,
        summary.groups,
        summary.memberships,
        summary.unresolved_members,
        summary.policies,
        summary.internet_service_policies
    );
    if summary.unresolved_members > 0 {
        line.yellow().to_string()
    } else {
        line.cyan().to_string()
    }
}

/// Render how many lines the splitter assigned to each section.
pub fn render_sections(sections: &SectionLines) -> String {
    SectionKind::ALL
        .into_iter()
        .map(|kind| format!("section=\"{}\" lines={}", kind.marker(), sections.get(kind).len()))
        .collect::<Vec<_>>()
        .join("\n")
}
