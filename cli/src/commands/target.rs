//! # Command Line Targets
//!
//! Parses what the user typed into something the resolver can classify:
//! * A single IP address (e.g. `10.0.0.1`, `2001:db8::1`, `[::1]`).
//! * A URL with a scheme and host (e.g. `https://intranet.example.org/login`).
//!
//! Host names are never resolved; a bare name without scheme is rejected.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use url::Url;
use zonr_common::network::target::uri_host_token;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Address(IpAddr),
    Uri(Url),
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(target) = parse_address(s) {
            return Ok(target);
        }

        parse_url(s)
    }
}

impl Target {
    pub fn kind(&self) -> &'static str {
        match self {
            Target::Address(IpAddr::V4(_)) => "IPv4",
            Target::Address(IpAddr::V6(_)) => "IPv6",
            Target::Uri(_) => "URL",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Address(ip) => write!(f, "{ip}"),
            Target::Uri(url) => write!(f, "{url}"),
        }
    }
}

/// Parses a plain or bracketed IP address.
fn parse_address(s: &str) -> Option<Target> {
    let unbracketed = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);

    unbracketed.parse::<IpAddr>().ok().map(Target::Address)
}

/// Parses a URL, insisting on a host so there is something to classify.
/// `file` URLs always have one: the local machine.
fn parse_url(s: &str) -> Result<Target, String> {
    let url = Url::parse(s).map_err(|e| format!("invalid target '{s}': {e}"))?;

    if uri_host_token(&url).is_none() {
        return Err(format!("invalid target '{s}': URL has no host"));
    }

    Ok(Target::Uri(url))
}
