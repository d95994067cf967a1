use std::net::IpAddr;

const LOCALHOST: &str = "localhost";

/// Recognizes host tokens that point back at the scanning machine.
///
/// Accepted token shapes are the ones found in URL hosts and address renderings:
/// `localhost`, dotted IPv4, plain IPv6 and bracketed IPv6 (`[::1]`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LoopbackAddressFinder;

impl LoopbackAddressFinder {
    pub fn new() -> Self {
        Self
    }

    pub fn is_loopback(&self, token: Option<&str>) -> bool {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            return false;
        };

        let host = token.strip_suffix('.').unwrap_or(token);
        if host.eq_ignore_ascii_case(LOCALHOST) {
            return true;
        }

        let unbracketed = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);

        unbracketed
            .parse::<IpAddr>()
            .is_ok_and(|ip| self.is_loopback_address(ip))
    }

    /// `127.0.0.0/8`, `::1` and IPv4-mapped IPv6 loopback (`::ffff:127.x.x.x`).
    pub fn is_loopback_address(&self, ip: IpAddr) -> bool {
        match ip {
            IpAddr::V4(v4) => v4.is_loopback(),
            IpAddr::V6(v6) => {
                v6.is_loopback() || v6.to_ipv4_mapped().is_some_and(|v4| v4.is_loopback())
            }
        }
    }
}
