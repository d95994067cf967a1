/// Chain definitions for the resolver, one per resolution kind.
///
/// Each value is either absent or a `|`-delimited, ordered list of strategy
/// definitions such as `intranet-ip-pattern:10.0.*.*|intranet-hostname-ends-with:corp.example`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Chain applied to URL targets.
    pub uri_strategy: Option<String>,
    /// Chain applied to IP address targets.
    pub address_strategy: Option<String>,
}

impl ResolverConfig {
    pub fn new(uri_strategy: Option<String>, address_strategy: Option<String>) -> Self {
        Self {
            uri_strategy: non_blank(uri_strategy),
            address_strategy: non_blank(address_strategy),
        }
    }

    pub fn uri_strategy(&self) -> Option<&str> {
        self.uri_strategy.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn address_strategy(&self) -> Option<&str> {
        self.address_strategy.as_deref().filter(|s| !s.trim().is_empty())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
