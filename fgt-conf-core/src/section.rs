use tracing::debug;

use crate::directive::Directive;

/// Top-level configuration sections the splitter tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Address,
    AddrGrp,
    Policy,
}

impl SectionKind {
    pub const ALL: [SectionKind; 3] = [
        SectionKind::Address,
        SectionKind::AddrGrp,
        SectionKind::Policy,
    ];

    /// Exact line that opens this section.
    pub fn marker(self) -> &'static str {
        match self {
            SectionKind::Address => "config firewall address",
            SectionKind::AddrGrp => "config firewall addrgrp",
            SectionKind::Policy => "config firewall policy",
        }
    }

    /// Match a trimmed line against the section-open markers.
    pub fn from_marker(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == line)
    }
}

/// How the splitter treats `config` / `end` pairs inside a tracked section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMode {
    /// Any `end` closes the current section; nested `config` lines are content.
    #[default]
    Flat,
    /// Nested `config ... end` sub-blocks are skipped and only the matching
    /// top-level `end` closes the section. Section markers only switch
    /// sections outside such sub-blocks.
    Nested,
}

/// Lines of each tracked section, in input order, with markers removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionLines {
    pub address: Vec<String>,
    pub addrgrp: Vec<String>,
    pub policy: Vec<String>,
}

impl SectionLines {
    pub fn get(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Address => &self.address,
            SectionKind::AddrGrp => &self.addrgrp,
            SectionKind::Policy => &self.policy,
        }
    }

    fn get_mut(&mut self, kind: SectionKind) -> &mut Vec<String> {
        match kind {
            SectionKind::Address => &mut self.address,
            SectionKind::AddrGrp => &mut self.addrgrp,
            SectionKind::Policy => &mut self.policy,
        }
    }
}

/// Partition a configuration export into address, address-group and policy
/// line groups.
///
/// A line that, once trimmed, equals one of the [`SectionKind::marker`]
/// phrases switches to that section even when another one is still open; a
/// trimmed `end` closes the current section. Marker and `end` lines are
/// dropped, other `config ...` lines inside a section are content (or skipped
/// sub-blocks in [`SplitMode::Nested`]), everything inside a section is copied
/// verbatim, and everything outside is discarded.
pub fn split_sections<S: AsRef<str>>(lines: &[S], mode: SplitMode) -> SectionLines {
    let mut out = SectionLines::default();
    let mut current: Option<SectionKind> = None;
    let mut depth = 0usize;

    for line in lines {
        let raw = line.as_ref();
        let trimmed = raw.trim();

        if let Some(kind) = SectionKind::from_marker(trimmed) {
            if mode == SplitMode::Flat || depth == 0 {
                current = Some(kind);
                depth = 0;
                continue;
            }
        }
        let Some(kind) = current else {
            continue;
        };

        if mode == SplitMode::Nested {
            if let Directive::Config(_) = Directive::classify(trimmed) {
                depth += 1;
                continue;
            }
            if depth > 0 {
                if trimmed == "end" {
                    depth -= 1;
                }
                continue;
            }
        }

        if trimmed == "end" {
            current = None;
            continue;
        }
        out.get_mut(kind).push(raw.to_string());
    }

    if let Some(kind) = current {
        debug!(section = kind.marker(), "input ended inside an open section");
    }
    debug!(
        address = out.address.len(),
        addrgrp = out.addrgrp.len(),
        policy = out.policy.len(),
        "split configuration sections"
    );

    out
}
