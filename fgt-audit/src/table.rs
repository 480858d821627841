use serde::Serialize;

use crate::extract::Extraction;
use crate::labels::Labels;
use crate::policy::{DestinationView, PolicyRecord};

/// Delimiter used for list-valued columns.
pub const JOIN_DELIMITER: &str = ",";

/// Names of the report tables, in output order.
pub const TABLE_NAMES: [&str; 3] = ["address", "group", "policy"];

/// A named table with a fixed header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: &'static str,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// The three report tables, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTables {
    pub address: Table,
    pub group: Table,
    pub policy: Table,
}

impl ReportTables {
    pub fn build(extraction: &Extraction, labels: &Labels) -> Self {
        let address = Table {
            name: TABLE_NAMES[0],
            header: labels.headers.address.clone(),
            rows: extraction
                .addresses
                .iter()
                .map(|a| vec![a.name.clone(), a.ip.clone()])
                .collect(),
        };
        let group = Table {
            name: TABLE_NAMES[1],
            header: labels.headers.group.clone(),
            rows: extraction
                .groups
                .iter()
                .map(|g| vec![g.group.clone(), g.member.clone(), g.resolved_ip.clone()])
                .collect(),
        };
        let policy = Table {
            name: TABLE_NAMES[2],
            header: labels.headers.policy.clone(),
            rows: extraction
                .policies
                .iter()
                .map(|p| policy_row(p, &labels.internet_service))
                .collect(),
        };

        Self {
            address,
            group,
            policy,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        [&self.address, &self.group, &self.policy].into_iter()
    }
}

fn policy_row(policy: &PolicyRecord, internet_service_label: &str) -> Vec<String> {
    let (destination, service) = match policy.destination_view() {
        DestinationView::InternetService { names } => {
            (names.join(JOIN_DELIMITER), internet_service_label.to_string())
        }
        DestinationView::Explicit {
            addresses,
            services,
        } => (addresses.join(JOIN_DELIMITER), services.join(JOIN_DELIMITER)),
    };

    vec![
        policy.id.clone(),
        policy.name.clone(),
        policy.srcintf.join(JOIN_DELIMITER),
        policy.dstintf.join(JOIN_DELIMITER),
        policy.srcaddr.join(JOIN_DELIMITER),
        destination,
        service,
        policy.action.clone(),
        policy.status.clone(),
    ]
}
