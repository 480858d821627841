use std::collections::BTreeSet;

use fgt_conf_core::{split_sections, SplitMode};
use serde::Serialize;
use tracing::debug;

use crate::address::{parse_addresses, AddressBook, AddressObject, Precedence};
use crate::group::{expand_groups, GroupMembership};
use crate::policy::{extract_policies, PolicyRecord};

/// Knobs for one extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    pub split_mode: SplitMode,
    pub precedence: Precedence,
}

/// Everything pulled out of one configuration export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub addresses: Vec<AddressObject>,
    pub groups: Vec<GroupMembership>,
    pub policies: Vec<PolicyRecord>,
}

/// Record counts for a finished extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub addresses: usize,
    pub groups: usize,
    pub memberships: usize,
    pub unresolved_members: usize,
    pub policies: usize,
    pub internet_service_policies: usize,
}

/// Run the splitter and all three section parsers over `lines`.
pub fn extract<S: AsRef<str>>(lines: &[S], options: &ExtractOptions) -> Extraction {
    let sections = split_sections(lines, options.split_mode);

    let addresses = parse_addresses(&sections.address);
    let book = AddressBook::build(&addresses, options.precedence);
    let groups = expand_groups(&sections.addrgrp, &book);
    let policies = extract_policies(&sections.policy);

    debug!(
        addresses = addresses.len(),
        named_addresses = book.len(),
        memberships = groups.len(),
        policies = policies.len(),
        "extraction finished"
    );

    Extraction {
        addresses,
        groups,
        policies,
    }
}

impl Extraction {
    pub fn summary(&self) -> ExtractionSummary {
        let group_names: BTreeSet<&str> = self.groups.iter().map(|g| g.group.as_str()).collect();
        ExtractionSummary {
            addresses: self.addresses.len(),
            groups: group_names.len(),
            memberships: self.groups.len(),
            unresolved_members: self.groups.iter().filter(|g| !g.is_resolved()).count(),
            policies: self.policies.len(),
            internet_service_policies: self
                .policies
                .iter()
                .filter(|p| p.dstaddr.is_empty() && p.internet_service)
                .count(),
        }
    }
}
