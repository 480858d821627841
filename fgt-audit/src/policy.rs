use fgt_conf_core::{nth_word, quoted_values, Directive};
use serde::Serialize;

/// One firewall policy, as declared in the policy section.
///
/// Fields never set in the source block stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PolicyRecord {
    pub id: String,
    pub name: String,
    pub srcintf: Vec<String>,
    pub dstintf: Vec<String>,
    pub srcaddr: Vec<String>,
    pub dstaddr: Vec<String>,
    pub service: Vec<String>,
    pub internet_service: bool,
    /// Empty unless `internet_service` is enabled when the block closes.
    pub internet_service_name: Vec<String>,
    pub action: String,
    pub status: String,
}

/// What a policy's destination column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationView<'a> {
    /// Traffic is matched by Internet Service categories rather than a
    /// destination address and service.
    InternetService { names: &'a [String] },
    Explicit {
        addresses: &'a [String],
        services: &'a [String],
    },
}

impl PolicyRecord {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Derive the displayed destination from the stored fields.
    pub fn destination_view(&self) -> DestinationView<'_> {
        if self.dstaddr.is_empty() && self.internet_service {
            DestinationView::InternetService {
                names: &self.internet_service_name,
            }
        } else {
            DestinationView::Explicit {
                addresses: &self.dstaddr,
                services: &self.service,
            }
        }
    }

    /// Drop Internet Service names left over from a disabled directive.
    fn finish(mut self) -> Self {
        if !self.internet_service {
            self.internet_service_name.clear();
        }
        self
    }

    fn apply(&mut self, key: &str, args: &str) {
        match key {
            "name" => {
                if let Some(name) = quoted_values(args).into_iter().next() {
                    self.name = name;
                }
            }
            "srcintf" => self.srcintf = quoted_values(args),
            "dstintf" => self.dstintf = quoted_values(args),
            "srcaddr" => self.srcaddr = quoted_values(args),
            "dstaddr" => self.dstaddr = quoted_values(args),
            "service" => self.service.extend(quoted_values(args)),
            "internet-service" => {
                self.internet_service = args.split_whitespace().any(|word| word == "enable");
            }
            "internet-service-name" => self.internet_service_name = quoted_values(args),
            "action" => {
                if let Some(action) = nth_word(args, 0) {
                    self.action = action.to_string();
                }
            }
            "status" => {
                if let Some(status) = nth_word(args, 0) {
                    self.status = status.to_string();
                }
            }
            _ => {}
        }
    }
}

/// Extract one [`PolicyRecord`] per `edit` block of the policy section.
///
/// A record is closed when the next `edit` opens or input ends, so a trailing
/// block without `next` is still returned. Duplicate ids stay separate.
pub fn extract_policies<S: AsRef<str>>(lines: &[S]) -> Vec<PolicyRecord> {
    let mut out = Vec::new();
    let mut current: Option<PolicyRecord> = None;

    for line in lines {
        match Directive::classify(line.as_ref()) {
            Directive::Edit(token) => {
                let id = nth_word(token, 0).unwrap_or(token);
                if let Some(done) = current.replace(PolicyRecord::new(id)) {
                    out.push(done.finish());
                }
            }
            Directive::Set { key, args } => {
                if let Some(record) = current.as_mut() {
                    record.apply(key, args);
                }
            }
            _ => {}
        }
    }

    out.extend(current.map(PolicyRecord::finish));
    out
}
