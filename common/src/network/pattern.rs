//! # Address Patterns
//!
//! Wildcard patterns for dotted (IPv4) and colon-delimited (IPv6) notations.
//!
//! A pattern is compared segment by segment, where `*` accepts any value for
//! that segment. There are no prefix semantics: pattern and candidate must
//! have the same number of segments.
//!
//! ```
//! use zonr_common::network::pattern::Ipv4Pattern;
//!
//! let pattern = Ipv4Pattern::new("10.0.*.*");
//! assert!(pattern.is_matching("10.0.3.4".parse().unwrap()));
//! assert!(!pattern.is_matching("10.1.3.4".parse().unwrap()));
//! ```

mod ipv4;
mod ipv6;

pub use ipv4::Ipv4Pattern;
pub use ipv6::Ipv6Pattern;

use thiserror::Error;

pub const WILDCARD: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("expected {expected} segments, found {found}")]
    SegmentCount { expected: usize, found: usize },
    #[error("segment '{segment}' is not a valid {kind} value")]
    InvalidSegment { segment: String, kind: &'static str },
}

/// Literal segment-wise matcher over strings split by a single divider.
///
/// Comparison is exact and case-sensitive; normalisation is left to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DividedStringPatternMatcher {
    segments: Vec<String>,
    divider: char,
}

impl DividedStringPatternMatcher {
    pub fn new(pattern: &str, divider: char) -> Self {
        Self {
            segments: pattern.split(divider).map(str::to_string).collect(),
            divider,
        }
    }

    pub fn is_matching(&self, candidate: Option<&str>) -> bool {
        let Some(candidate) = candidate.filter(|c| !c.is_empty()) else {
            return false;
        };

        let candidate_segments: Vec<&str> = candidate.split(self.divider).collect();
        if candidate_segments.len() != self.segments.len() {
            return false;
        }

        self.segments
            .iter()
            .zip(candidate_segments)
            .all(|(pattern, value)| pattern == WILDCARD || pattern == value)
    }
}

/// Splits `pattern` and normalises every non-wildcard segment with `normalize`.
///
/// Returns the rebuilt pattern string, ready for the literal matcher.
fn normalize_segments(
    pattern: &str,
    divider: char,
    expected: usize,
    normalize: impl Fn(&str) -> Result<String, PatternError>,
) -> Result<String, PatternError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }

    let segments: Vec<&str> = pattern.split(divider).collect();
    if segments.len() != expected {
        return Err(PatternError::SegmentCount {
            expected,
            found: segments.len(),
        });
    }

    let normalized = segments
        .into_iter()
        .map(|segment| match segment {
            WILDCARD => Ok(WILDCARD.to_string()),
            other => normalize(other),
        })
        .collect::<Result<Vec<String>, PatternError>>()?;

    let separator = divider.to_string();
    Ok(normalized.join(separator.as_str()))
}
