use url::Url;
use zonr_common::network::target::{NetworkTarget, TargetClassification, uri_host_token};

use super::{ResolveStrategy, TargetResolve, activate};

pub const ENDS_WITH_PREFIX: &str = "intranet-hostname-ends-with";
pub const STARTS_WITH_PREFIX: &str = "intranet-hostname-starts-with";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostnameMatch {
    EndsWith,
    StartsWith,
}

/// Classifies URLs as intranet by the shape of their host name.
///
/// Hosts and configured values are compared lower-cased.
#[derive(Debug, Clone, Copy)]
pub struct HostnameStrategy {
    matching: HostnameMatch,
}

impl HostnameStrategy {
    /// `intranet-hostname-ends-with:<suffix>,...`
    pub fn ends_with() -> Self {
        Self {
            matching: HostnameMatch::EndsWith,
        }
    }

    /// `intranet-hostname-starts-with:<prefix>,...`
    pub fn starts_with() -> Self {
        Self {
            matching: HostnameMatch::StartsWith,
        }
    }
}

impl ResolveStrategy<Url> for HostnameStrategy {
    fn name(&self) -> &'static str {
        match self.matching {
            HostnameMatch::EndsWith => ENDS_WITH_PREFIX,
            HostnameMatch::StartsWith => STARTS_WITH_PREFIX,
        }
    }

    fn description(&self) -> &'static str {
        match self.matching {
            HostnameMatch::EndsWith => "INTRANET when the URL host ends with one of the values",
            HostnameMatch::StartsWith => "INTRANET when the URL host starts with one of the values",
        }
    }

    fn initialize(&self, definition: &str) -> Option<Box<dyn TargetResolve<Url>>> {
        let values = activate(self.name(), definition)?
            .into_iter()
            .map(|value| value.to_ascii_lowercase())
            .collect();

        Some(Box::new(HostnameRule {
            matching: self.matching,
            values,
        }))
    }
}

struct HostnameRule {
    matching: HostnameMatch,
    values: Vec<String>,
}

impl HostnameRule {
    fn matches(&self, host: &str) -> bool {
        self.values.iter().any(|value| match self.matching {
            HostnameMatch::EndsWith => host.ends_with(value.as_str()),
            HostnameMatch::StartsWith => host.starts_with(value.as_str()),
        })
    }
}

impl TargetResolve<Url> for HostnameRule {
    fn resolve_target_for(&self, url: &Url) -> Option<NetworkTarget> {
        let host = uri_host_token(url)?.to_ascii_lowercase();

        self.matches(&host)
            .then(|| NetworkTarget::new(url.clone(), TargetClassification::Intranet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[rstest]
    #[case(HostnameStrategy::ends_with(), "intranet-hostname-ends-with:a.com")]
    #[case(HostnameStrategy::ends_with(), "intranet-hostname-ends-with:a.com, b.com")]
    #[case(HostnameStrategy::starts_with(), "intranet-hostname-starts-with:intra")]
    #[case(HostnameStrategy::starts_with(), "intranet-hostname-starts-with:a,b,c")]
    fn test_initialize_accepts(#[case] strategy: HostnameStrategy, #[case] definition: &str) {
        assert!(strategy.initialize(definition).is_some());
    }

    #[rstest]
    #[case(HostnameStrategy::ends_with(), "")]
    #[case(HostnameStrategy::ends_with(), "intranet-hostname-ends-with")]
    #[case(HostnameStrategy::ends_with(), "intranet-hostname-ends-with:")]
    #[case(HostnameStrategy::ends_with(), " intranet-hostname-ends-with:a.com")]
    #[case(HostnameStrategy::ends_with(), "intranet-hostname-starts-with:a.com")]
    #[case(HostnameStrategy::starts_with(), "intranet-hostname-ends-with:a.com")]
    #[case(HostnameStrategy::starts_with(), "intranet-hostname-starts-with: ,")]
    #[case(HostnameStrategy::starts_with(), "intranet-ip-pattern:10.*.*.*")]
    fn test_initialize_declines(#[case] strategy: HostnameStrategy, #[case] definition: &str) {
        assert!(strategy.initialize(definition).is_none());
    }

    #[rstest]
    #[case("https://somewhere.intranet.example.org", true)]
    #[case("http://intranet.example.org/path", true)]
    #[case("ftp://SOMEWHERE.Intranet.Example.org", true)]
    #[case("sftp://files.intranet.example.org:2222", true)]
    #[case("https://www.example.org", false)]
    #[case("https://intranet.example.org.evil.com", false)]
    fn test_ends_with(#[case] target: &str, #[case] intranet: bool) {
        let resolver = HostnameStrategy::ends_with()
            .initialize("intranet-hostname-ends-with:intranet.example.org")
            .unwrap();
        let expected = intranet
            .then(|| NetworkTarget::new(url(target), TargetClassification::Intranet));

        assert_eq!(resolver.resolve_target_for(&url(target)), expected);
    }

    #[rstest]
    #[case("https://intra.example.org", true)]
    #[case("https://INTRA-build.example.org", true)]
    #[case("https://build.example.org", true)]
    #[case("https://www.intra.example.org", false)]
    fn test_starts_with(#[case] target: &str, #[case] intranet: bool) {
        let resolver = HostnameStrategy::starts_with()
            .initialize("intranet-hostname-starts-with:intra, Build.")
            .unwrap();
        let found = resolver.resolve_target_for(&url(target));

        assert_eq!(found.is_some(), intranet, "{target}");
        if let Some(found) = found {
            assert_eq!(found.classification(), TargetClassification::Intranet);
        }
    }

    #[test]
    fn test_url_without_host_has_no_opinion() {
        let resolver = HostnameStrategy::starts_with()
            .initialize("intranet-hostname-starts-with:mailto")
            .unwrap();
        assert_eq!(resolver.resolve_target_for(&url("mailto:someone@example.org")), None);
    }
}
