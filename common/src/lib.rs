//! Shared building blocks for target classification.
//!
//! * **[`network`]**: the classified target model, address patterns and loopback detection.
//! * **[`definition`]**: parsing of `prefix:value,...` strategy definitions and `|` chains.
//! * **[`config`]**: the resolver chain configuration.

pub mod config;
pub mod definition;
pub mod network;
