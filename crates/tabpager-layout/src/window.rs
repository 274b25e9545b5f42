#![forbid(unsafe_code)]

//! Windowing math: visible and prefetch ranges, index commit, and progress.
//!
//! Everything here is a pure function of the scroll offset, the page width,
//! and the item count, so the engine and its property tests share one
//! definition.

use tabpager_core::{IndexRange, Rect};

/// Upper bound on the number of simultaneously visible pages.
pub const MAX_VISIBLE_ITEMS: usize = 5;

/// Threshold that only commits an index change at a full page.
pub const COMMIT_AT_FULL_PAGE: f64 = 0.999_999_999;

/// Offsets within this many pages of an integer position snap to it.
const PAGE_SNAP_EPSILON: f64 = 1e-9;

/// Direction of the content movement relative to the drag-start offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    /// Offset increasing: content moves left, later pages come in.
    Left,
    /// Offset decreasing: content moves right, earlier pages come in.
    Right,
}

impl ScrollDirection {
    /// Direction of travel from `previous` to `current`.
    #[inline]
    pub fn between(previous: f64, current: f64) -> Self {
        if current >= previous {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// A continuous transition between two pages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressTransition {
    pub from: usize,
    pub to: usize,
    /// Fraction of the way from `from` to `to`, in `0.0..=1.0`.
    pub progress: f64,
}

/// Page size shared by every index.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageGeometry {
    pub width: f64,
    pub height: f64,
}

impl PageGeometry {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Frame of the page at `index` in content coordinates.
    #[inline]
    pub fn frame(&self, index: usize) -> Rect {
        Rect::new(index as f64 * self.width, 0.0, self.width, self.height)
    }
}

/// Position of `offset` in pages, snapped to an integer when within rounding
/// noise of one.
fn page_position(offset: f64, width: f64) -> f64 {
    let position = offset / width;
    let nearest = position.round();
    if (position - nearest).abs() < PAGE_SNAP_EPSILON {
        nearest
    } else {
        position
    }
}

fn clamp_to_count(value: f64, count: usize) -> usize {
    if value <= 0.0 {
        0
    } else {
        (value as usize).min(count)
    }
}

/// Pages overlapping the viewport `[offset, offset + width)`.
///
/// The result lies in `[0, count)` and never spans more than
/// [`MAX_VISIBLE_ITEMS`] pages. A non-positive width or a non-finite offset
/// yields the empty range.
pub fn visible_range(offset: f64, width: f64, count: usize) -> IndexRange {
    if width <= 0.0 || !width.is_finite() || !offset.is_finite() || count == 0 {
        return IndexRange::EMPTY;
    }
    let start = clamp_to_count(page_position(offset, width).floor(), count);
    let end = clamp_to_count(page_position(offset + width, width).ceil(), count);
    let len = end.saturating_sub(start).min(MAX_VISIBLE_ITEMS);
    IndexRange::with_len(start, len)
}

/// The visible range grown by `prefetch_count` pages on each side.
///
/// Empty when prefetching is disabled.
pub fn prefetch_range(visible: IndexRange, prefetch_count: usize, count: usize) -> IndexRange {
    if prefetch_count == 0 {
        return IndexRange::EMPTY;
    }
    visible.expanded(prefetch_count, count)
}

/// Index the pager should report as current for `offset`.
///
/// Moving left, the index advances once the offset passes `threshold` of
/// the next page; moving right, it retreats once it passes `threshold` of
/// the previous one. A threshold at or above 1.0 commits only at a full
/// page.
pub fn committed_index(
    offset: f64,
    width: f64,
    count: usize,
    direction: ScrollDirection,
    threshold: f64,
) -> Option<usize> {
    if width <= 0.0 || count == 0 || !offset.is_finite() {
        return None;
    }
    let threshold = if threshold >= 1.0 {
        COMMIT_AT_FULL_PAGE
    } else {
        threshold.max(0.0)
    };
    let position = page_position(offset, width);
    let candidate = match direction {
        ScrollDirection::Left => (position - threshold).ceil(),
        ScrollDirection::Right => (position + threshold).floor(),
    };
    Some(clamp_to_count(candidate, count - 1))
}

/// Transition pair and progress for `offset`.
///
/// `None` when the offset lies outside the content or when there are fewer
/// than two pages to move between.
pub fn progress_transition(
    offset: f64,
    width: f64,
    count: usize,
    direction: ScrollDirection,
) -> Option<ProgressTransition> {
    if width <= 0.0 || count < 2 || !offset.is_finite() {
        return None;
    }
    let position = page_position(offset, width);
    let floor = position.floor();
    let last = count - 1;
    if floor < 0.0 || floor >= count as f64 || position > last as f64 {
        return None;
    }
    let floor_index = floor as usize;
    let fraction = position - floor;
    let transition = match direction {
        ScrollDirection::Left => {
            let from = floor_index;
            let to = (from + 1).min(last);
            if from == to {
                ProgressTransition {
                    from: last - 1,
                    to,
                    progress: 1.0,
                }
            } else {
                ProgressTransition {
                    from,
                    to,
                    progress: fraction,
                }
            }
        }
        ScrollDirection::Right => {
            let to = floor_index;
            let from = (to + 1).min(last);
            if from == to {
                // Resting on the last page while moving back toward it.
                ProgressTransition {
                    from,
                    to: last - 1,
                    progress: 0.0,
                }
            } else {
                ProgressTransition {
                    from,
                    to,
                    progress: 1.0 - fraction,
                }
            }
        }
    };
    Some(transition)
}
