//! Parsing of strategy definitions of the shape `<prefix>:<value>,<value>,...`.

use thiserror::Error;

pub const PREFIX_SEPARATOR: char = ':';
pub const VALUE_SEPARATOR: char = ',';
pub const CHAIN_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("definition does not start with '{0}'")]
    WrongPrefix(&'static str),
    #[error("'{0}' is not followed by ':'")]
    MissingSeparator(&'static str),
    #[error("definition for '{0}' has no values")]
    NoValues(&'static str),
}

/// A definition that belongs to a known prefix, split into its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyDefinition {
    prefix: &'static str,
    values: Vec<String>,
}

impl StrategyDefinition {
    /// Accepts `definition` only if it starts with exactly `prefix`, followed
    /// immediately by `:` and at least one non-empty value.
    ///
    /// Nothing is trimmed before the prefix, so `" prefix:a"` is rejected.
    /// Values are trimmed and empty entries are dropped.
    pub fn parse(prefix: &'static str, definition: &str) -> Result<Self, DefinitionError> {
        let rest = definition
            .strip_prefix(prefix)
            .ok_or(DefinitionError::WrongPrefix(prefix))?;
        let rest = rest
            .strip_prefix(PREFIX_SEPARATOR)
            .ok_or(DefinitionError::MissingSeparator(prefix))?;

        let values: Vec<String> = rest
            .split(VALUE_SEPARATOR)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();

        if values.is_empty() {
            return Err(DefinitionError::NoValues(prefix));
        }

        Ok(Self { prefix, values })
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }
}

/// Splits a chain like `a:x|b:y` into its tokens, in order.
///
/// Tokens are passed on untouched; blank chains yield nothing.
pub fn split_chain(chain: &str) -> impl Iterator<Item = &str> {
    chain
        .split(CHAIN_SEPARATOR)
        .filter(|token| !token.trim().is_empty())
}
