use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::table::{ReportTables, Table};

/// Failure to persist a rendered report.
#[derive(Debug, Error)]
#[error("failed to write report {path}: {source}")]
pub struct WriteError {
    pub path: String,
    #[source]
    pub source: std::io::Error,
}

impl WriteError {
    fn new(path: &Path, source: std::io::Error) -> Self {
        Self {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Render all tables as one pretty-printed JSON object keyed by table name.
pub fn render_json(tables: &ReportTables) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(tables)
}

/// Render one table as CSV, header first.
pub fn render_csv(table: &Table) -> String {
    let mut out = String::new();
    for row in std::iter::once(&table.header).chain(table.rows.iter()) {
        let fields: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\r', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Write `<name>.csv` for every table into `dir`, creating it when missing.
pub fn write_csv_dir(tables: &ReportTables, dir: &Path) -> Result<Vec<PathBuf>, WriteError> {
    fs::create_dir_all(dir).map_err(|source| WriteError::new(dir, source))?;

    let mut written = Vec::new();
    for table in tables.iter() {
        let path = dir.join(format!("{}.csv", table.name));
        write_text(&path, &render_csv(table))?;
        written.push(path);
    }
    Ok(written)
}

/// Write rendered report text to `path`.
pub fn write_text(path: &Path, contents: &str) -> Result<(), WriteError> {
    fs::write(path, contents).map_err(|source| WriteError::new(path, source))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}
