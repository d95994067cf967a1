//! The pluggable **abstraction** for target classification.
//!
//! A [`ResolveStrategy`] owns a definition prefix. Handed a chain token, it either
//! declines (the token belongs to someone else or is malformed) or returns a bound
//! [`TargetResolve`] carrying the parsed values. The bound resolver is immutable,
//! so one configured chain can serve any number of threads.
//!
//! A resolver answers with `Some(NetworkTarget)` when it has an opinion and `None`
//! otherwise; the chain moves on to the next entry on `None`.

use std::net::IpAddr;

use tracing::{debug, trace};
use url::Url;
use zonr_common::definition::{DefinitionError, StrategyDefinition};
use zonr_common::network::target::NetworkTarget;

mod hostname;
mod ip_pattern;

pub use hostname::{ENDS_WITH_PREFIX, HostnameStrategy, STARTS_WITH_PREFIX};
pub use ip_pattern::{IP_PATTERN_PREFIX, IpPatternStrategy, IpPatterns};

/// A strategy bound to one definition, ready to classify targets of type `T`.
pub trait TargetResolve<T>: Send + Sync {
    fn resolve_target_for(&self, target: &T) -> Option<NetworkTarget>;
}

/// Self-activating classifier for targets of type `T`.
pub trait ResolveStrategy<T>: Send + Sync {
    /// The definition prefix this strategy activates on.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str {
        ""
    }

    /// Returns a bound resolver if `definition` belongs to this strategy and is well formed.
    fn initialize(&self, definition: &str) -> Option<Box<dyn TargetResolve<T>>>;
}

pub type UriResolveStrategy = dyn ResolveStrategy<Url>;
pub type AddressResolveStrategy = dyn ResolveStrategy<IpAddr>;

/// Strategies registered for URL targets, in registration order.
pub fn builtin_uri_strategies() -> Vec<Box<UriResolveStrategy>> {
    vec![
        Box::new(HostnameStrategy::ends_with()),
        Box::new(HostnameStrategy::starts_with()),
        Box::new(IpPatternStrategy),
    ]
}

/// Strategies registered for IP address targets, in registration order.
pub fn builtin_address_strategies() -> Vec<Box<AddressResolveStrategy>> {
    vec![Box::new(IpPatternStrategy)]
}

/// Shared activation check: the values of `definition`, if it belongs to `prefix`.
pub(crate) fn activate(prefix: &'static str, definition: &str) -> Option<Vec<String>> {
    match StrategyDefinition::parse(prefix, definition) {
        Ok(parsed) => {
            trace!("{} activates on {:?}", parsed.prefix(), parsed.values());
            Some(parsed.into_values())
        }
        Err(e @ DefinitionError::WrongPrefix(_)) => {
            trace!("{prefix} declines '{definition}': {e}");
            None
        }
        Err(e) => {
            debug!("{prefix} declines '{definition}': {e}");
            None
        }
    }
}
