//! FortiGate configuration audit export.
//!
//! Turns a FortiGate plain-text configuration export into three tables for
//! review: firewall addresses, address-group memberships and policies.
//!
//! # Architecture
//!
//! - [`fgt_conf_core`] reads the export and splits it into the
//!   `config firewall address`, `config firewall addrgrp` and
//!   `config firewall policy` sections.
//! - [`address`] parses address objects and builds the read-only
//!   [`address::AddressBook`] used for member lookups.
//! - [`group`] expands groups into one row per member.
//! - [`policy`] extracts one record per policy block.
//! - [`extract`] runs the whole pipeline.
//! - [`table`] derives the report tables, [`labels`] configures their text,
//!   and [`export`] / [`report`] render them as JSON, CSV or terminal text.
//!
//! Parsing never fails: malformed lines are skipped, invalid subnets keep
//! their raw address, and unknown group members resolve to
//! [`group::UNRESOLVED`]. Only reading the input and writing the report can
//! return errors.
//!
//! # Examples
//!
//! ```ignore
//! use fgt_audit::extract::{extract, ExtractOptions};
//! use fgt_audit::labels::Labels;
//! use fgt_audit::table::ReportTables;
//! use fgt_conf_core::read_lines;
//!
//! let lines = read_lines("fgt-backup.conf".as_ref())?;
//! let extraction = extract(&lines, &ExtractOptions::default());
//! let tables = ReportTables::build(&extraction, &Labels::default());
//! println!("{}", fgt_audit::export::render_json(&tables)?);
//! ```

pub mod address;
pub mod export;
pub mod extract;
pub mod group;
pub mod labels;
pub mod policy;
pub mod report;
pub mod table;
