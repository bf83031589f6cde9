//! Tag-based priority resolution.
//!
//! # Responsibility
//! - Extract a numeric urgency from a record's tags.
//!
//! # Invariants
//! - A `P<digit>` fragment anywhere inside a tag counts; `Project-P2` is P2.
//! - With several matching tags, the smallest digit (most urgent) wins.
//! - Records without any matching tag sort after every tagged record.

use once_cell::sync::Lazy;
use regex::Regex;

static PRIORITY_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"P(\d)").expect("valid priority tag regex"));

/// Urgency derived from tags. Lower values sort first.
///
/// Variant order is load-bearing: the derived `Ord` puts every
/// `Tagged(_)` before `Untagged`, which models the original
/// "no priority tag means positive infinity" rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    /// Smallest digit found across all `P<digit>` tag matches.
    Tagged(u8),
    /// No tag matched; sorts last.
    Untagged,
}

impl Priority {
    /// Resolves the priority of a tag set.
    ///
    /// # Contract
    /// - Each tag contributes at most its first `P<digit>` match.
    /// - The minimum digit across all tags is the record's priority.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Self {
        let mut best: Option<u8> = None;
        for tag in tags {
            let Some(captures) = PRIORITY_TAG_RE.captures(tag.as_ref()) else {
                continue;
            };
            let Some(digit) = captures.get(1).and_then(|m| m.as_str().parse::<u8>().ok()) else {
                continue;
            };
            best = Some(best.map_or(digit, |current| current.min(digit)));
        }
        best.map_or(Self::Untagged, Self::Tagged)
    }
}
