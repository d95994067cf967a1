use std::fmt;
use std::net::IpAddr;

use tracing::{debug, warn};
use url::{Host, Url};
use zonr_common::network::pattern::{Ipv4Pattern, Ipv6Pattern, PatternError};
use zonr_common::network::target::{NetworkTarget, TargetClassification};

use super::{ResolveStrategy, TargetResolve, activate};

pub const IP_PATTERN_PREFIX: &str = "intranet-ip-pattern";

/// `intranet-ip-pattern:<pattern>,...` with IPv4 (`10.0.*.*`) and full IPv6
/// (`2001:db8:*:*:*:*:*:*`) patterns mixed freely.
///
/// Serves both families: addresses directly, and URLs whose host is an IP literal.
#[derive(Debug, Clone, Copy, Default)]
pub struct IpPatternStrategy;

impl IpPatternStrategy {
    fn bind(&self, definition: &str) -> Option<IpPatterns> {
        let patterns = IpPatterns::parse(activate(IP_PATTERN_PREFIX, definition)?);
        if patterns.is_empty() {
            warn!("'{definition}' holds no valid IP pattern, ignoring it");
            return None;
        }
        debug!("Bound {} IP pattern(s): {patterns}", patterns.len());
        Some(patterns)
    }
}

impl ResolveStrategy<IpAddr> for IpPatternStrategy {
    fn name(&self) -> &'static str {
        IP_PATTERN_PREFIX
    }

    fn description(&self) -> &'static str {
        "INTRANET when the address matches one of the IPv4/IPv6 wildcard patterns"
    }

    fn initialize(&self, definition: &str) -> Option<Box<dyn TargetResolve<IpAddr>>> {
        self.bind(definition)
            .map(|patterns| Box::new(patterns) as Box<dyn TargetResolve<IpAddr>>)
    }
}

impl ResolveStrategy<Url> for IpPatternStrategy {
    fn name(&self) -> &'static str {
        IP_PATTERN_PREFIX
    }

    fn description(&self) -> &'static str {
        "INTRANET when the URL host is an IP literal matching one of the patterns"
    }

    fn initialize(&self, definition: &str) -> Option<Box<dyn TargetResolve<Url>>> {
        self.bind(definition)
            .map(|patterns| Box::new(patterns) as Box<dyn TargetResolve<Url>>)
    }
}

/// A set of validated IPv4 and IPv6 patterns.
#[derive(Debug, Clone, Default)]
pub struct IpPatterns {
    v4: Vec<Ipv4Pattern>,
    v6: Vec<Ipv6Pattern>,
}

impl IpPatterns {
    /// Sorts every value into the family it validates for. Values valid for
    /// neither are dropped with a warning.
    pub fn parse<S: AsRef<str>>(values: impl IntoIterator<Item = S>) -> Self {
        let mut patterns = Self::default();

        for value in values {
            let value = value.as_ref();
            let v4 = Ipv4Pattern::new(value);
            if v4.is_valid() {
                patterns.v4.push(v4);
                continue;
            }
            let v6 = Ipv6Pattern::new(value);
            if v6.is_valid() {
                patterns.v6.push(v6);
                continue;
            }

            let validation: Result<(), PatternError> = if value.contains(':') {
                v6.validate()
            } else {
                v4.validate()
            };
            if let Err(reason) = validation {
                warn!("Dropping invalid IP pattern '{value}': {reason}");
            }
        }

        patterns
    }

    pub fn is_empty(&self) -> bool {
        self.v4.is_empty() && self.v6.is_empty()
    }

    pub fn len(&self) -> usize {
        self.v4.len() + self.v6.len()
    }

    pub fn is_matching(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => self.v4.iter().any(|p| p.is_matching(v4)),
            IpAddr::V6(v6) => self.v6.iter().any(|p| p.is_matching(v6)),
        }
    }
}

impl fmt::Display for IpPatterns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .v4
            .iter()
            .map(ToString::to_string)
            .chain(self.v6.iter().map(ToString::to_string))
            .collect();
        f.write_str(&rendered.join(","))
    }
}

impl TargetResolve<IpAddr> for IpPatterns {
    fn resolve_target_for(&self, address: &IpAddr) -> Option<NetworkTarget> {
        self.is_matching(*address)
            .then(|| NetworkTarget::new(*address, TargetClassification::Intranet))
    }
}

impl TargetResolve<Url> for IpPatterns {
    fn resolve_target_for(&self, url: &Url) -> Option<NetworkTarget> {
        let ip = match url.host()? {
            Host::Ipv4(v4) => IpAddr::V4(v4),
            Host::Ipv6(v6) => IpAddr::V6(v6),
            Host::Domain(_) => return None,
        };

        self.is_matching(ip)
            .then(|| NetworkTarget::new(url.clone(), TargetClassification::Intranet))
    }
}
