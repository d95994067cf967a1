//! # Target Classification Engine
//!
//! Decides whether a scan target may be attacked and which trust zone it lives in.
//!
//! * **[`detector`]**: illegal-target vetoes (loopback, missing targets).
//! * **[`strategy`]**: self-configuring classifiers, selected by chain definitions.
//! * **[`resolver`]**: the [`TargetResolver`] façade tying vetoes and chains together.
//!
//! ```
//! use url::Url;
//! use zonr_common::config::ResolverConfig;
//! use zonr_common::network::target::TargetClassification;
//! use zonr_core::TargetResolver;
//!
//! let config = ResolverConfig::new(
//!     Some("intranet-hostname-ends-with:intranet.example.org".to_string()),
//!     None,
//! );
//! let resolver = TargetResolver::with_defaults(config);
//!
//! let url = Url::parse("https://somewhere.intranet.example.org").unwrap();
//! assert_eq!(
//!     resolver.resolve_uri(Some(&url)).classification(),
//!     TargetClassification::Intranet
//! );
//! ```

pub mod detector;
pub mod resolver;
pub mod strategy;

pub use resolver::{TargetResolver, TargetResolverBuilder};
