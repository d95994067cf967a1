use std::fmt;
use std::net::Ipv4Addr;

use super::{normalize_segments, DividedStringPatternMatcher, PatternError};

const SEGMENTS: usize = 4;

/// Dotted-decimal wildcard pattern, e.g. `10.0.*.*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv4Pattern {
    raw: String,
    matcher: DividedStringPatternMatcher,
    validity: Result<(), PatternError>,
}

impl Ipv4Pattern {
    /// Builds a pattern. Never fails; an invalid pattern simply never matches.
    pub fn new(pattern: &str) -> Self {
        let normalized = normalize_segments(pattern, '.', SEGMENTS, |segment| {
            segment
                .parse::<u8>()
                .map(|octet| octet.to_string())
                .map_err(|_| PatternError::InvalidSegment {
                    segment: segment.to_string(),
                    kind: "IPv4 octet",
                })
        });

        let (matcher, validity) = match normalized {
            Ok(normalized) => (DividedStringPatternMatcher::new(&normalized, '.'), Ok(())),
            Err(e) => (DividedStringPatternMatcher::new(pattern, '.'), Err(e)),
        };

        Self {
            raw: pattern.to_string(),
            matcher,
            validity,
        }
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        self.validity.clone()
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_ok()
    }

    pub fn is_matching(&self, address: Ipv4Addr) -> bool {
        self.is_valid() && self.matcher.is_matching(Some(&address.to_string()))
    }
}

impl fmt::Display for Ipv4Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
