//! Dotted-version parsing and comparison
//!
//! Versions are compared as tuples of integers, never as strings. A tuple is
//! only comparable to another tuple of the same length; callers enforce that
//! before comparing.

use std::cmp::Ordering;
use std::fmt;

/// Parsed integer components of a dotted version string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTuple(Vec<u64>);

impl VersionTuple {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl fmt::Display for VersionTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Parses a dotted version string into its numeric components.
///
/// A pre-release suffix (everything after the first `-`) and a leading `v`
/// are stripped before splitting on `.`. Any non-numeric component makes the
/// whole parse fail; callers must treat `None` as "unparseable", never as
/// version zero.
pub fn parse_version(raw: &str) -> Option<VersionTuple> {
    if raw.is_empty() {
        return None;
    }
    let numeric = raw.split('-').next().unwrap_or(raw);
    let numeric = numeric.strip_prefix('v').unwrap_or(numeric);
    numeric
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()
        .map(VersionTuple)
}

/// Compares two tuples component-wise, left to right, stopping at the first
/// difference. Only well-defined for equal-length tuples.
pub fn compare(a: &VersionTuple, b: &VersionTuple) -> Ordering {
    for (left, right) in a.components().iter().zip(b.components()) {
        match left.cmp(right) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Whether `version` is at most `max`: ties in every compared component count
/// as "at most".
pub fn version_at_most(version: &VersionTuple, max: &VersionTuple) -> bool {
    compare(version, max) != Ordering::Greater
}
