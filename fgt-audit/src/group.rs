use fgt_conf_core::{quoted_name, quoted_values, Directive};
use serde::Serialize;
use tracing::debug;

use crate::address::AddressBook;

/// Placeholder IP for group members with no matching address object.
pub const UNRESOLVED: &str = "N/A";

/// One member of one address group, with the member's resolved address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMembership {
    pub group: String,
    pub member: String,
    pub resolved_ip: String,
}

impl GroupMembership {
    pub fn is_resolved(&self) -> bool {
        self.resolved_ip != UNRESOLVED
    }
}

/// Expand the address-group section into one record per member.
///
/// Every `set member` line contributes its own records, so a member listed
/// twice appears twice. Members that are themselves groups, or addresses
/// without a subnet, resolve to [`UNRESOLVED`].
pub fn expand_groups<S: AsRef<str>>(lines: &[S], book: &AddressBook) -> Vec<GroupMembership> {
    let mut out = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        match Directive::classify(line.as_ref()) {
            Directive::Edit(token) => {
                if let Some(name) = quoted_name(token) {
                    current = Some(name.to_string());
                }
            }
            Directive::Set { key: "member", args } => {
                let Some(group) = &current else {
                    continue;
                };
                for member in quoted_values(args).into_iter().filter(|m| !m.is_empty()) {
                    let resolved_ip = match book.resolve(&member) {
                        Some(ip) => ip.to_string(),
                        None => {
                            debug!(group = %group, member = %member, "group member has no address");
                            UNRESOLVED.to_string()
                        }
                    };
                    out.push(GroupMembership {
                        group: group.clone(),
                        member,
                        resolved_ip,
                    });
                }
            }
            Directive::Next => current = None,
            _ => {}
        }
    }

    out
}
