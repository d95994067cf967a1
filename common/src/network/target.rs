//! # Classified Target Model
//!
//! Defines what the resolver hands back for every classification request.
//!
//! A target is either:
//! * A parsed IP address (hostnames are resolved upstream, never here).
//! * A parsed URL, of which only the host is ever inspected.
//!
//! Each resolution produces exactly one [`NetworkTarget`], tagged with a
//! [`TargetClassification`].

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;
use url::Url;

/// The trust zone assigned to a target.
///
/// There is no ordering between the variants; downstream scan authorization
/// only ever compares them for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetClassification {
    /// Public destination. Also the fallback when nothing else has an opinion.
    Internet,
    /// Internal destination, matched by a configured strategy.
    Intranet,
    /// Vetoed outright (loopback and friends). Never to be scanned.
    Illegal,
    /// No information at all, e.g. nothing was given to classify.
    Unknown,
}

impl TargetClassification {
    pub const ALL: [TargetClassification; 4] = [
        TargetClassification::Internet,
        TargetClassification::Intranet,
        TargetClassification::Illegal,
        TargetClassification::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetClassification::Internet => "INTERNET",
            TargetClassification::Intranet => "INTRANET",
            TargetClassification::Illegal => "ILLEGAL",
            TargetClassification::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TargetClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetParseError {
    #[error("unknown classification: {0}")]
    UnknownClassification(String),
}

impl FromStr for TargetClassification {
    type Err = TargetParseError;

    /// Parses the upper-case names (`INTERNET`, `INTRANET`, ...), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|classification| classification.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TargetParseError::UnknownClassification(s.to_string()))
    }
}

/// The destination a classification was made for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetAddress {
    Address(IpAddr),
    Uri(Url),
}

impl TargetAddress {
    /// The token inspected by loopback detection and hostname strategies.
    ///
    /// See [`uri_host_token`] for how URLs are reduced to a host.
    pub fn host_token(&self) -> Option<String> {
        match self {
            TargetAddress::Address(ip) => Some(ip.to_string()),
            TargetAddress::Uri(url) => uri_host_token(url).map(str::to_string),
        }
    }
}

/// The host of `url` exactly as the `url` crate renders it, so IPv6 hosts keep
/// their brackets (`[::1]`).
///
/// `file` URLs always point at the local machine. The `url` crate drops the
/// host of `file://localhost/...` entirely, so a `file` URL without a host
/// yields `localhost`. Any other URL without a host yields `None`.
pub fn uri_host_token(url: &Url) -> Option<&str> {
    match url.host_str().filter(|host| !host.is_empty()) {
        Some(host) => Some(host),
        None if url.scheme() == FILE_SCHEME => Some(LOCALHOST),
        None => None,
    }
}

const FILE_SCHEME: &str = "file";
const LOCALHOST: &str = "localhost";

impl From<IpAddr> for TargetAddress {
    fn from(ip: IpAddr) -> Self {
        TargetAddress::Address(ip)
    }
}

impl From<Url> for TargetAddress {
    fn from(url: Url) -> Self {
        TargetAddress::Uri(url)
    }
}

impl fmt::Display for TargetAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetAddress::Address(ip) => write!(f, "{ip}"),
            TargetAddress::Uri(url) => write!(f, "{url}"),
        }
    }
}

/// A classified destination. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NetworkTarget {
    address: Option<TargetAddress>,
    classification: TargetClassification,
}

impl NetworkTarget {
    pub fn new(address: impl Into<TargetAddress>, classification: TargetClassification) -> Self {
        Self {
            address: Some(address.into()),
            classification,
        }
    }

    /// The result for a request that carried no target at all.
    pub fn unknown() -> Self {
        Self {
            address: None,
            classification: TargetClassification::Unknown,
        }
    }

    pub fn address(&self) -> Option<&TargetAddress> {
        self.address.as_ref()
    }

    pub fn classification(&self) -> TargetClassification {
        self.classification
    }

}

impl fmt::Display for NetworkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.address {
            Some(address) => write!(f, "{address} ({})", self.classification),
            None => write!(f, "<none> ({})", self.classification),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_classification_from_str() {
        assert_eq!("INTRANET".parse(), Ok(TargetClassification::Intranet));
        assert_eq!("internet".parse(), Ok(TargetClassification::Internet));
        assert_eq!(" Illegal ".parse(), Ok(TargetClassification::Illegal));
        assert_eq!("UNKNOWN".parse(), Ok(TargetClassification::Unknown));
        assert!("null".parse::<TargetClassification>().is_err());
    }

    #[test]
    fn test_classification_display_round_trips() {
        for classification in TargetClassification::ALL {
            assert_eq!(classification.to_string().parse(), Ok(classification));
        }
    }

    #[test]
    fn test_equality_is_structural() {
        let ip = IpAddr::V4(Ipv4Addr::new(172, 217, 22, 99));
        let a = NetworkTarget::new(ip, TargetClassification::Internet);
        let b = NetworkTarget::new(ip, TargetClassification::Internet);
        let c = NetworkTarget::new(ip, TargetClassification::Intranet);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, NetworkTarget::unknown());
    }

    #[test]
    fn test_host_token() {
        let url = Url::parse("https://[::1]:8443/path?x=y").unwrap();
        assert_eq!(TargetAddress::from(url).host_token().as_deref(), Some("[::1]"));

        let url = Url::parse("sftp://files.example.org/upload").unwrap();
        assert_eq!(
            TargetAddress::from(url).host_token().as_deref(),
            Some("files.example.org")
        );

        let url = Url::parse("mailto:someone@example.org").unwrap();
        assert_eq!(TargetAddress::from(url).host_token(), None);

        let ip: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(TargetAddress::from(ip).host_token().as_deref(), Some("2001:db8::1"));
    }

    #[test]
    fn test_file_urls_point_at_localhost() {
        for raw in ["file:///etc/passwd", "file://localhost/etc/passwd", "FILE:///C:/Windows"] {
            let url = Url::parse(raw).unwrap();
            assert_eq!(uri_host_token(&url), Some("localhost"), "{raw}");
        }

        let url = Url::parse("file://fileserver.corp/share/report.txt").unwrap();
        assert_eq!(uri_host_token(&url), Some("fileserver.corp"));
    }

    #[test]
    fn test_unknown_has_no_address() {
        let target = NetworkTarget::unknown();
        assert!(target.address().is_none());
        assert_eq!(target.classification(), TargetClassification::Unknown);
        assert_eq!(target.to_string(), "<none> (UNKNOWN)");
    }
}
