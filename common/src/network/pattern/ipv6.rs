use std::fmt;
use std::net::Ipv6Addr;

use super::{normalize_segments, DividedStringPatternMatcher, PatternError};

const SEGMENTS: usize = 8;

/// Full-notation IPv6 wildcard pattern, e.g. `2001:db8:*:*:*:*:*:*`.
///
/// All eight groups must be spelled out; the compressed `::` form is rejected.
/// Hex groups are compared by value, so `DB8`, `db8` and `0db8` are equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipv6Pattern {
    raw: String,
    matcher: DividedStringPatternMatcher,
    validity: Result<(), PatternError>,
}

impl Ipv6Pattern {
    pub fn new(pattern: &str) -> Self {
        let normalized = normalize_segments(pattern, ':', SEGMENTS, |segment| {
            u16::from_str_radix(segment, 16)
                .map(|group| format!("{group:x}"))
                .map_err(|_| PatternError::InvalidSegment {
                    segment: segment.to_string(),
                    kind: "IPv6 group",
                })
        });

        let (matcher, validity) = match normalized {
            Ok(normalized) => (DividedStringPatternMatcher::new(&normalized, ':'), Ok(())),
            Err(e) => (DividedStringPatternMatcher::new(pattern, ':'), Err(e)),
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

    pub fn is_matching(&self, address: Ipv6Addr) -> bool {
        self.is_valid() && self.matcher.is_matching(Some(&full_notation(address)))
    }
}

impl fmt::Display for Ipv6Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Renders all eight groups as lower-case hex without leading zeros.
fn full_notation(address: Ipv6Addr) -> String {
    address
        .segments()
        .iter()
        .map(|group| format!("{group:x}"))
        .collect::<Vec<String>>()
        .join(":")
}
