use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const ADDRESS_COLUMNS: usize = 2;
pub const GROUP_COLUMNS: usize = 3;
pub const POLICY_COLUMNS: usize = 9;

/// Presentation text for the generated report.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Labels {
    /// Service column text for policies matched by Internet Service.
    pub internet_service: String,
    pub headers: Headers,
}

/// Column headers of each report table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Headers {
    pub address: Vec<String>,
    pub group: Vec<String>,
    pub policy: Vec<String>,
}

/// Errors returned when loading a labels file.
#[derive(Debug, Error)]
pub enum LabelsError {
    #[error("failed to read labels file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse labels file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("labels file {path}: {table} headers need {expected} columns, found {found}")]
    Columns {
        path: String,
        table: &'static str,
        expected: usize,
        found: usize,
    },
}

impl Labels {
    /// Load labels from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LabelsError> {
        let raw = fs::read_to_string(path).map_err(|source| LabelsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        parse_labels(&raw, path.display().to_string())
    }
}

impl Default for Labels {
    /// Labels compiled into the binary.
    fn default() -> Self {
        let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/labels/default.toml"));
        parse_labels(embedded, "embedded labels".to_string()).unwrap_or_else(|_| fallback_labels())
    }
}

fn parse_labels(raw: &str, path: String) -> Result<Labels, LabelsError> {
    let labels: Labels = toml::from_str(raw).map_err(|source| LabelsError::Parse {
        path: path.clone(),
        source,
    })?;

    let checks = [
        ("address", ADDRESS_COLUMNS, labels.headers.address.len()),
        ("group", GROUP_COLUMNS, labels.headers.group.len()),
        ("policy", POLICY_COLUMNS, labels.headers.policy.len()),
    ];
    for (table, expected, found) in checks {
        if expected != found {
            return Err(LabelsError::Columns {
                path,
                table,
                expected,
                found,
            });
        }
    }

    Ok(labels)
}

fn fallback_labels() -> Labels {
    let owned = |names: &[&str]| names.iter().map(|n| n.to_string()).collect::<Vec<_>>();
    Labels {
        internet_service: "Internet Service".to_string(),
        headers: Headers {
            address: owned(&["name", "ip"]),
            group: owned(&["group", "member", "resolved_ip"]),
            policy: owned(&[
                "id", "name", "srcintf", "dstintf", "srcaddr", "dstaddr", "service", "action",
                "status",
            ]),
        },
    }
}
