//! Member directory filtering.

use crate::data::{Member, SEGMENTS};
use std::fmt;

/// Segment chip selection in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SegmentFilter {
    /// Sentinel matching every segment
    #[default]
    All,
    /// Exact, case-sensitive segment match
    Only(String),
}

impl SegmentFilter {
    /// Parse a filter value; `"all"` is the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            SegmentFilter::All
        } else {
            SegmentFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, segment: &str) -> bool {
        match self {
            SegmentFilter::All => true,
            SegmentFilter::Only(wanted) => wanted == segment,
        }
    }

    /// Chip label
    pub fn label(&self) -> &str {
        match self {
            SegmentFilter::All => "All",
            SegmentFilter::Only(segment) => segment,
        }
    }

    /// Chips in display order: `All` followed by every known segment
    pub fn chips() -> Vec<SegmentFilter> {
        std::iter::once(SegmentFilter::All)
            .chain(SEGMENTS.iter().map(|s| SegmentFilter::Only((*s).to_string())))
            .collect()
    }

    /// Next chip, wrapping around
    pub fn next(&self) -> SegmentFilter {
        self.step(1)
    }

    /// Previous chip, wrapping around
    pub fn previous(&self) -> SegmentFilter {
        self.step(-1)
    }

    fn step(&self, delta: isize) -> SegmentFilter {
        let chips = Self::chips();
        let len = chips.len() as isize;
        // Segments outside the chip set restart from "All"
        let current = chips.iter().position(|c| c == self).unwrap_or(0) as isize;
        let index = (current + delta).rem_euclid(len) as usize;
        chips[index].clone()
    }
}

impl fmt::Display for SegmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentFilter::All => f.write_str("all"),
            SegmentFilter::Only(segment) => f.write_str(segment),
        }
    }
}

/// Whether `member` passes the search term and segment filter.
///
/// An empty search matches everything; otherwise the term is matched
/// case-insensitively as a substring of the name or company.
pub fn member_matches(member: &Member, search: &str, segment: &SegmentFilter) -> bool {
    if !segment.matches(&member.segment) {
        return false;
    }
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    member.name.to_lowercase().contains(&needle) || member.company.to_lowercase().contains(&needle)
}

/// Members matching the filters, in their original order.
pub fn filter_members<'a>(
    members: &'a [Member],
    search: &str,
    segment: &SegmentFilter,
) -> Vec<&'a Member> {
    members
        .iter()
        .filter(|m| member_matches(m, search, segment))
        .collect()
}
