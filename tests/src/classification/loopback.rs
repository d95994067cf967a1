#![cfg(test)]
use std::net::IpAddr;

use rstest::rstest;
use url::Url;
use zonr_common::network::loopback::LoopbackAddressFinder;
use zonr_core::detector::{IllegalAddressTargetDetector, IllegalTargetDetector, IllegalUriTargetDetector};

#[rstest]
#[case("localhost", true)]
#[case("127.0.0.1", true)]
#[case("[::1]", true)]
#[case("example.org", false)]
#[case("192.168.178.1", false)]
fn loopback_tokens(#[case] token: &str, #[case] loopback: bool) {
    assert_eq!(LoopbackAddressFinder::new().is_loopback(Some(token)), loopback);
}

/// The scheme never matters, only the host.
#[rstest]
#[case("http")]
#[case("https")]
#[case("ftp")]
#[case("sftp")]
#[case("ssh")]
fn uri_detector_ignores_scheme(#[case] scheme: &str) {
    let detector = IllegalUriTargetDetector::new(LoopbackAddressFinder::new());

    for host in ["localhost", "127.0.0.1", "[::1]"] {
        let url = Url::parse(&format!("{scheme}://{host}/")).unwrap();
        assert!(detector.is_illegal(Some(&url)), "{url}");
    }

    let url = Url::parse(&format!("{scheme}://example.org/")).unwrap();
    assert!(!detector.is_illegal(Some(&url)), "{url}");
}

/// `file` URLs name the local machine whether or not they spell out `localhost`.
#[rstest]
#[case("file://localhost/etc/passwd", true)]
#[case("file:///etc/passwd", true)]
#[case("file://[::1]/etc/passwd", true)]
#[case("file://fileserver.corp/share/report.txt", false)]
fn uri_detector_local_files(#[case] raw: &str, #[case] illegal: bool) {
    let detector = IllegalUriTargetDetector::default();
    let url = Url::parse(raw).unwrap();
    assert_eq!(detector.is_illegal(Some(&url)), illegal, "{url}");
}

#[test]
fn address_detector() {
    let detector = IllegalAddressTargetDetector::new(LoopbackAddressFinder::new());
    let loopback: IpAddr = "127.0.0.1".parse().unwrap();
    let private: IpAddr = "192.168.178.1".parse().unwrap();

    assert!(detector.is_illegal(None));
    assert!(detector.is_illegal(Some(&loopback)));
    assert!(!detector.is_illegal(Some(&private)));
}
