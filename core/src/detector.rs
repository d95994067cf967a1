//! Veto gates that run before any strategy is consulted.

use std::net::IpAddr;

use url::Url;
use zonr_common::network::loopback::LoopbackAddressFinder;
use zonr_common::network::target::{TargetAddress, uri_host_token};

/// Decides whether a target must never be scanned.
///
/// A missing target is always illegal.
pub trait IllegalTargetDetector<T>: Send + Sync {
    fn is_illegal(&self, target: Option<&T>) -> bool;
}

/// Vetoes loopback IP addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct IllegalAddressTargetDetector {
    loopback: LoopbackAddressFinder,
}

impl IllegalAddressTargetDetector {
    pub fn new(loopback: LoopbackAddressFinder) -> Self {
        Self { loopback }
    }
}

impl IllegalTargetDetector<IpAddr> for IllegalAddressTargetDetector {
    fn is_illegal(&self, target: Option<&IpAddr>) -> bool {
        let Some(address) = target else {
            return true;
        };
        let token = TargetAddress::Address(*address).host_token();
        self.loopback.is_loopback(token.as_deref())
    }
}

/// Vetoes URLs whose host is a loopback. The scheme does not matter, except
/// that a `file` URL without a host counts as `localhost`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IllegalUriTargetDetector {
    loopback: LoopbackAddressFinder,
}

impl IllegalUriTargetDetector {
    pub fn new(loopback: LoopbackAddressFinder) -> Self {
        Self { loopback }
    }
}

impl IllegalTargetDetector<Url> for IllegalUriTargetDetector {
    fn is_illegal(&self, target: Option<&Url>) -> bool {
        let Some(url) = target else {
            return true;
        };
        self.loopback.is_loopback(uri_host_token(url))
    }
}
