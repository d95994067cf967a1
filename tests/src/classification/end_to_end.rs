#![cfg(test)]
use std::net::IpAddr;
use std::sync::Arc;
use std::thread;

use rstest::rstest;
use url::Url;
use zonr_common::config::ResolverConfig;
use zonr_common::network::target::{NetworkTarget, TargetClassification};
use zonr_core::TargetResolver;

fn uri_resolver(chain: &str) -> TargetResolver {
    TargetResolver::with_defaults(ResolverConfig::new(Some(chain.to_string()), None))
}

fn address_resolver(chain: &str) -> TargetResolver {
    TargetResolver::with_defaults(ResolverConfig::new(None, Some(chain.to_string())))
}

/// Hosts inside the configured suffix are INTRANET, everything else falls back to INTERNET.
#[rstest]
#[case("https://somewhere.intranet.example.org", TargetClassification::Intranet)]
#[case("https://www.example.org", TargetClassification::Internet)]
fn hostname_ends_with(#[case] target: &str, #[case] expected: TargetClassification) {
    let resolver = uri_resolver("intranet-hostname-ends-with:intranet.example.org");
    let url = Url::parse(target).unwrap();

    assert_eq!(resolver.resolve_uri(Some(&url)), NetworkTarget::new(url, expected));
}

#[rstest]
#[case("intranet-ip-pattern:2001:CA52:*:*:*:*:*:*", TargetClassification::Internet)]
#[case("intranet-ip-pattern:2001:DB8:*:*:*:*:*:*", TargetClassification::Intranet)]
fn ipv6_pattern(#[case] chain: &str, #[case] expected: TargetClassification) {
    let address: IpAddr = "2001:DB8:0:0:8:800:200C:417A".parse().unwrap();

    assert_eq!(
        address_resolver(chain).resolve_address(Some(address)),
        NetworkTarget::new(address, expected)
    );
}

#[rstest]
#[case("54.1.2.3", TargetClassification::Intranet)]
#[case("10.0.9.9", TargetClassification::Intranet)]
#[case("10.1.9.9", TargetClassification::Internet)]
#[case("172.217.22.99", TargetClassification::Internet)]
#[case("127.0.0.1", TargetClassification::Illegal)]
#[case("::1", TargetClassification::Illegal)]
fn ipv4_pattern(#[case] address: &str, #[case] expected: TargetClassification) {
    let resolver = address_resolver("intranet-ip-pattern:54.*.*.*,10.0.*.*");
    let address: IpAddr = address.parse().unwrap();

    assert_eq!(resolver.resolve_address(Some(address)).classification(), expected);
}

/// Loopback is vetoed even when a strategy would call it intranet.
#[rstest]
#[case("http://localhost")]
#[case("https://127.0.0.1:8443/login")]
#[case("ftp://[::1]/pub")]
#[case("file://localhost/etc/passwd")]
#[case("file:///etc/passwd")]
fn illegal_beats_configuration(#[case] target: &str) {
    let resolver = uri_resolver(
        "intranet-hostname-starts-with:localhost,127.,[|intranet-ip-pattern:127.*.*.*,*:*:*:*:*:*:*:*",
    );
    let url = Url::parse(target).unwrap();

    assert_eq!(
        resolver.resolve_uri(Some(&url)),
        NetworkTarget::new(url, TargetClassification::Illegal)
    );
}

#[test]
fn missing_targets_are_unknown() {
    let resolver = TargetResolver::with_defaults(ResolverConfig::new(
        Some("intranet-hostname-ends-with:example.org".into()),
        Some("intranet-ip-pattern:*.*.*.*".into()),
    ));

    assert_eq!(resolver.resolve_uri(None), NetworkTarget::unknown());
    assert_eq!(resolver.resolve_address(None), NetworkTarget::unknown());
}

/// Misconfigured entries are skipped and the rest of the chain still applies.
#[rstest]
#[case(" intranet-hostname-ends-with:example.org", TargetClassification::Internet)]
#[case("intranet-hostname-ends-with:", TargetClassification::Internet)]
#[case("intranet-hostname-endswith:example.org", TargetClassification::Internet)]
#[case("unknown|intranet-hostname-ends-with:example.org", TargetClassification::Intranet)]
#[case("intranet-ip-pattern:999.*.*.*|intranet-hostname-ends-with:example.org", TargetClassification::Intranet)]
fn misconfiguration_is_skipped(#[case] chain: &str, #[case] expected: TargetClassification) {
    let url = Url::parse("https://build.example.org").unwrap();
    assert_eq!(uri_resolver(chain).resolve_uri(Some(&url)).classification(), expected);
}

#[test]
fn chain_keeps_configured_order() {
    let url = Url::parse("https://10.20.30.40/").unwrap();

    let ip_first = uri_resolver("intranet-ip-pattern:10.*.*.*|intranet-hostname-starts-with:10.");
    let found = ip_first.resolve_uri(Some(&url));
    assert_eq!(found, NetworkTarget::new(url.clone(), TargetClassification::Intranet));

    assert_eq!(
        ip_first.uri_chain(),
        vec!["intranet-ip-pattern", "intranet-hostname-starts-with"]
    );
}

#[test]
fn resolver_is_shared_across_threads() {
    let resolver = Arc::new(address_resolver("intranet-ip-pattern:192.168.*.*"));

    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                let address = IpAddr::from([192, 168, 0, i]);
                resolver.resolve_address(Some(address)).classification()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), TargetClassification::Intranet);
    }
}
