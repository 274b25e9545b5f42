#![forbid(unsafe_code)]

//! Half-open index intervals.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous half-open interval `[start, end)` of page indices.
///
/// An interval with `end <= start` is empty. Constructors normalize empty
/// intervals so that `end >= start` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IndexRange {
    start: usize,
    end: usize,
}

impl IndexRange {
    /// The empty range at zero.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Create a range. `end` is raised to `start` if it is smaller.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        let end = if end < start { start } else { end };
        Self { start, end }
    }

    /// Create a range from a start and a length.
    #[inline]
    pub const fn with_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(len),
        }
    }

    /// First index (inclusive).
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// One past the last index.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of indices covered.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the range covers no index.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Check whether `index` lies in the range.
    #[inline]
    pub const fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// True when `other` lies entirely inside this range.
    ///
    /// An empty `other` is contained by every range.
    #[inline]
    pub const fn contains_range(&self, other: &IndexRange) -> bool {
        other.is_empty() || (other.start >= self.start && other.end <= self.end)
    }

    /// Overlap of two ranges, or `None` when they share no index.
    pub fn intersection(&self, other: &IndexRange) -> Option<IndexRange> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(IndexRange { start, end })
    }

    /// True when the ranges share at least one index.
    #[inline]
    pub fn intersects(&self, other: &IndexRange) -> bool {
        self.intersection(other).is_some()
    }

    /// Grow the range by `by` on both sides, clamped to `[0, limit)`.
    pub fn expanded(&self, by: usize, limit: usize) -> IndexRange {
        let start = self.start.saturating_sub(by).min(limit);
        let end = self.end.saturating_add(by).min(limit);
        IndexRange::new(start, end)
    }

    /// Iterate over the indices in ascending order.
    #[inline]
    pub fn iter(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Range<usize>> for IndexRange {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<IndexRange> for Range<usize> {
    fn from(range: IndexRange) -> Self {
        range.start..range.end
    }
}

impl IntoIterator for IndexRange {
    type Item = usize;
    type IntoIter = Range<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
