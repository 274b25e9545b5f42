#![forbid(unsafe_code)]

//! Indicator styles.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geometry family of the selection indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BarStyle {
    /// No indicator.
    None,
    /// Underline inset from the cell edges, moving linearly.
    Progress,
    /// Underline that stretches to the arriving cell, then snaps its
    /// trailing edge after it.
    ProgressBounce,
    /// Like [`BarStyle::ProgressBounce`], with both edges easing so the
    /// stretch is continuous.
    #[default]
    ProgressElastic,
    /// Full-height highlight behind the cell.
    Cover,
}

impl BarStyle {
    /// All styles, in declaration order.
    pub const ALL: [BarStyle; 5] = [
        BarStyle::None,
        BarStyle::Progress,
        BarStyle::ProgressBounce,
        BarStyle::ProgressElastic,
        BarStyle::Cover,
    ];

    /// Whether an indicator is drawn at all.
    #[inline]
    pub const fn shows_indicator(self) -> bool {
        !matches!(self, BarStyle::None)
    }

    #[inline]
    pub const fn is_cover(self) -> bool {
        matches!(self, BarStyle::Cover)
    }

    /// Whether the style uses the two-piece stretch formulas.
    #[inline]
    pub const fn is_stretching(self) -> bool {
        matches!(self, BarStyle::ProgressBounce | BarStyle::ProgressElastic)
    }
}
