use std::collections::HashMap;
use std::net::Ipv4Addr;

use fgt_conf_core::{quoted_name, Directive};
use ipnet::{ipv4_mask_to_prefix, Ipv4Net};
use serde::Serialize;
use tracing::{debug, warn};

/// A named firewall address with its normalized network address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressObject {
    pub name: String,
    pub ip: String,
}

/// Which declaration wins when an address name appears more than once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Precedence {
    /// Later declarations overwrite earlier ones.
    #[default]
    LastDeclared,
    /// The first declaration is kept.
    FirstDeclared,
}

/// Parse the address section into `(name, ip)` records in declaration order.
///
/// Only `set subnet` directives produce records; objects of other types
/// (fqdn, iprange, ...) are skipped. Duplicate names are kept.
pub fn parse_addresses<S: AsRef<str>>(lines: &[S]) -> Vec<AddressObject> {
    let mut out = Vec::new();
    let mut current: Option<String> = None;

    for line in lines {
        match Directive::classify(line.as_ref()) {
            Directive::Edit(token) => {
                if let Some(name) = quoted_name(token) {
                    current = Some(name.to_string());
                }
            }
            Directive::Set { key: "subnet", args } => {
                let Some(name) = &current else {
                    continue;
                };
                if let Some((ip, mask)) = subnet_args(args) {
                    out.push(AddressObject {
                        name: name.clone(),
                        ip: normalize_subnet(ip, mask),
                    });
                }
            }
            Directive::Next => current = None,
            _ => {}
        }
    }

    out
}

fn subnet_args(args: &str) -> Option<(&str, &str)> {
    let mut words = args.split_whitespace();
    let ip = words.next()?;
    let mask = words.next()?;
    (is_dotted(ip) && is_dotted(mask)).then_some((ip, mask))
}

fn is_dotted(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// Return the network address of `ip/mask`, or `ip` unchanged when the pair
/// is not a valid IPv4 network.
///
/// The mask may be given as a netmask (`255.255.255.0`) or a host mask
/// (`0.0.0.255`).
pub fn normalize_subnet(ip: &str, mask: &str) -> String {
    match network_address(ip, mask) {
        Some(network) => network.to_string(),
        None => {
            debug!(ip, mask, "subnet is not a valid IPv4 network; keeping raw address");
            ip.to_string()
        }
    }
}

fn network_address(ip: &str, mask: &str) -> Option<Ipv4Addr> {
    let ip: Ipv4Addr = ip.parse().ok()?;
    let mask: Ipv4Addr = mask.parse().ok()?;
    let prefix = ipv4_mask_to_prefix(mask)
        .or_else(|_| ipv4_mask_to_prefix(Ipv4Addr::from(!u32::from(mask))))
        .ok()?;
    Ipv4Net::new(ip, prefix).ok().map(|net| net.network())
}

/// Read-only name to address lookup, built once from the parsed addresses.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: HashMap<String, String>,
}

impl AddressBook {
    pub fn build(addresses: &[AddressObject], precedence: Precedence) -> Self {
        let mut entries: HashMap<String, String> = HashMap::with_capacity(addresses.len());
        for address in addresses {
            if let Some(existing) = entries.get(&address.name) {
                if existing != &address.ip {
                    warn!(
                        name = %address.name,
                        first = %existing,
                        later = %address.ip,
                        ?precedence,
                        "address declared more than once with different subnets"
                    );
                }
                if precedence == Precedence::FirstDeclared {
                    continue;
                }
            }
            entries.insert(address.name.clone(), address.ip.clone());
        }
        Self { entries }
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
