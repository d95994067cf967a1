//! # Target Resolver
//!
//! The single entry point for classifying a target before it may be scanned.
//!
//! Resolution order for every request:
//! 1. No target at all → `UNKNOWN`.
//! 2. The illegal-target detector vetoes → `ILLEGAL`.
//! 3. The configured chain is walked in order; the first strategy with an
//!    opinion decides.
//! 4. Nobody had an opinion → `INTERNET`.
//!
//! Chains are bound to strategies once, when the resolver is built. A chain
//! entry that no registered strategy accepts is skipped.

use std::fmt;
use std::net::IpAddr;

use tracing::{debug, warn};
use url::Url;
use zonr_common::config::ResolverConfig;
use zonr_common::definition::split_chain;
use zonr_common::network::target::{NetworkTarget, TargetAddress, TargetClassification};

use crate::detector::{IllegalAddressTargetDetector, IllegalTargetDetector, IllegalUriTargetDetector};
use crate::strategy::{self, ResolveStrategy, TargetResolve};

struct ChainLink<T> {
    strategy: &'static str,
    definition: String,
    resolver: Box<dyn TargetResolve<T>>,
}

struct Chain<T> {
    links: Vec<ChainLink<T>>,
}

impl<T> Chain<T> {
    fn bind(definition: Option<&str>, strategies: &[Box<dyn ResolveStrategy<T>>]) -> Self {
        let Some(definition) = definition else {
            return Self { links: Vec::new() };
        };

        let links = split_chain(definition)
            .filter_map(|token| {
                let bound = strategies.iter().find_map(|strategy| {
                    strategy.initialize(token).map(|resolver| ChainLink {
                        strategy: strategy.name(),
                        definition: token.to_string(),
                        resolver,
                    })
                });
                match &bound {
                    Some(link) => debug!("Chain entry '{token}' bound to {}", link.strategy),
                    None => warn!("No strategy accepts chain entry '{token}', skipping it"),
                }
                bound
            })
            .collect();

        Self { links }
    }

    fn resolve(&self, target: &T) -> Option<NetworkTarget> {
        self.links.iter().find_map(|link| {
            let found = link.resolver.resolve_target_for(target);
            match &found {
                Some(found) => debug!(
                    "{} ('{}') classified target as {}",
                    link.strategy,
                    link.definition,
                    found.classification()
                ),
                None => debug!("{} has no opinion", link.strategy),
            }
            found
        })
    }

    fn strategies(&self) -> Vec<&'static str> {
        self.links.iter().map(|link| link.strategy).collect()
    }
}

/// Classifies URLs and IP addresses. Immutable after construction and safe to
/// share between threads.
pub struct TargetResolver {
    uri_chain: Chain<Url>,
    address_chain: Chain<IpAddr>,
    illegal_uri_detector: Box<dyn IllegalTargetDetector<Url>>,
    illegal_address_detector: Box<dyn IllegalTargetDetector<IpAddr>>,
}

impl TargetResolver {
    pub fn builder(config: ResolverConfig) -> TargetResolverBuilder {
        TargetResolverBuilder::new(config)
    }

    /// A resolver with the built-in strategies and loopback vetoes.
    pub fn with_defaults(config: ResolverConfig) -> Self {
        Self::builder(config)
            .uri_strategies(strategy::builtin_uri_strategies())
            .address_strategies(strategy::builtin_address_strategies())
            .build()
    }

    pub fn resolve_uri(&self, url: Option<&Url>) -> NetworkTarget {
        resolve(url, self.illegal_uri_detector.as_ref(), &self.uri_chain)
    }

    pub fn resolve_address(&self, address: Option<IpAddr>) -> NetworkTarget {
        resolve(
            address.as_ref(),
            self.illegal_address_detector.as_ref(),
            &self.address_chain,
        )
    }

    /// Strategy names of the bound URI chain, in evaluation order.
    pub fn uri_chain(&self) -> Vec<&'static str> {
        self.uri_chain.strategies()
    }

    /// Strategy names of the bound address chain, in evaluation order.
    pub fn address_chain(&self) -> Vec<&'static str> {
        self.address_chain.strategies()
    }
}

impl fmt::Debug for TargetResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetResolver")
            .field("uri_chain", &self.uri_chain())
            .field("address_chain", &self.address_chain())
            .finish_non_exhaustive()
    }
}

fn resolve<T>(
    target: Option<&T>,
    detector: &dyn IllegalTargetDetector<T>,
    chain: &Chain<T>,
) -> NetworkTarget
where
    T: Clone + Into<TargetAddress>,
{
    let Some(target) = target else {
        return NetworkTarget::unknown();
    };

    if detector.is_illegal(Some(target)) {
        return NetworkTarget::new(target.clone(), TargetClassification::Illegal);
    }

    chain
        .resolve(target)
        .unwrap_or_else(|| NetworkTarget::new(target.clone(), TargetClassification::Internet))
}

/// Collects strategies and detectors, then binds the configured chains.
pub struct TargetResolverBuilder {
    config: ResolverConfig,
    uri_strategies: Vec<Box<dyn ResolveStrategy<Url>>>,
    address_strategies: Vec<Box<dyn ResolveStrategy<IpAddr>>>,
    illegal_uri_detector: Box<dyn IllegalTargetDetector<Url>>,
    illegal_address_detector: Box<dyn IllegalTargetDetector<IpAddr>>,
}

impl TargetResolverBuilder {
    fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            uri_strategies: Vec::new(),
            address_strategies: Vec::new(),
            illegal_uri_detector: Box::new(IllegalUriTargetDetector::default()),
            illegal_address_detector: Box::new(IllegalAddressTargetDetector::default()),
        }
    }

    pub fn uri_strategy(mut self, strategy: impl ResolveStrategy<Url> + 'static) -> Self {
        self.uri_strategies.push(Box::new(strategy));
        self
    }

    pub fn uri_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy<Url>>>) -> Self {
        self.uri_strategies.extend(strategies);
        self
    }

    pub fn address_strategy(mut self, strategy: impl ResolveStrategy<IpAddr> + 'static) -> Self {
        self.address_strategies.push(Box::new(strategy));
        self
    }

    pub fn address_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy<IpAddr>>>) -> Self {
        self.address_strategies.extend(strategies);
        self
    }

    pub fn illegal_uri_detector(mut self, detector: impl IllegalTargetDetector<Url> + 'static) -> Self {
        self.illegal_uri_detector = Box::new(detector);
        self
    }

    pub fn illegal_address_detector(
        mut self,
        detector: impl IllegalTargetDetector<IpAddr> + 'static,
    ) -> Self {
        self.illegal_address_detector = Box::new(detector);
        self
    }

    pub fn build(self) -> TargetResolver {
        TargetResolver {
            uri_chain: Chain::bind(self.config.uri_strategy(), &self.uri_strategies),
            address_chain: Chain::bind(self.config.address_strategy(), &self.address_strategies),
            illegal_uri_detector: self.illegal_uri_detector,
            illegal_address_detector: self.illegal_address_detector,
        }
    }
}
